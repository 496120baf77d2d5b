//! Prompt Analyzer - keyword-driven prompt classification
//!
//! Maps raw prompt text to a [`PromptAnalysis`]: domain, task type,
//! complexity, expertise, expected response length, time sensitivity and
//! accuracy requirement. The analysis is pure and deterministic and never
//! fails.
//!
//! # Module Structure
//!
//! - `types`: PromptAnalysis and its enums
//! - `keywords`: keyword tables
//! - `analyze`: classification rules

mod analyze;
mod keywords;
mod types;

#[cfg(test)]
mod tests;

pub use analyze::analyze_prompt;
pub use types::{Domain, PromptAnalysis, ResponseLength, TaskType, TimeSensitivity};
