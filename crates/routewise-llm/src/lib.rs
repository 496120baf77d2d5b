//! Routewise LLM - prompt-aware model selection
//!
//! This crate picks a language model for each prompt:
//! - Analyzer: keyword-driven classification of a prompt
//! - Catalog: the candidate models with prices and capability scores
//! - Cost: token and price estimates
//! - Selector: decision tree, confidence, alternatives and explanation
//! - Gateway: provider clients (OpenRouter, Mistral, Gemini)
//! - Router: analyze, select and generate in one call

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod catalog;
pub mod cost;
pub mod error;
pub mod gateway;
pub mod router;
pub mod selector;
pub mod util;

pub use analyzer::{analyze_prompt, Domain, PromptAnalysis, ResponseLength, TaskType, TimeSensitivity};
pub use catalog::{Capabilities, Catalog, ModelDescriptor, ModelTier, Provider};
pub use cost::{calculate_estimated_cost, estimate_token_count, TokenEstimates};
pub use error::{Error, Result};
pub use gateway::{
    ChatCompletionsGateway, GatewayConfig, GeminiGateway, MockGateway, ProviderCredentials,
    ProviderEndpoint, ProviderGateway, ResponseGateway,
};
pub use router::{PromptRouter, RoutedResponse};
pub use selector::{
    HistorySnapshot, ModelSelection, ModelSelector, ScoringDetails, SelectionMode, UsageHistory,
    WinProbabilities,
};
