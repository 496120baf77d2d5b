//! Model Selector - choose a catalog model for an analyzed prompt
//!
//! Automatic mode runs a fixed pipeline: win probabilities from the analysis
//! and usage history, a decision-tree walk, cost, confidence, alternatives
//! ranked by class weight, and an explanation. Manual mode skips all of it
//! and reports the caller's model at full confidence.
//!
//! # Module Structure
//!
//! - `types`: SelectionMode, ModelSelection, WinProbabilities, ScoringDetails
//! - `history`: UsageHistory streak counter
//! - `probability`: win-probability weights and model classes
//! - `tree`: data-driven decision tree
//! - `confidence`: confidence score
//! - `scoring`: per-model fit breakdown
//! - `reasoning`: explanation text
//! - `selector_impl`: ModelSelector

mod confidence;
mod history;
mod probability;
mod reasoning;
mod scoring;
mod selector_impl;
mod tree;
mod types;


pub use confidence::{base_confidence, confidence_score, task_type_score, MANUAL_CONFIDENCE};
pub use history::{HistorySnapshot, UsageHistory, SWITCH_THRESHOLD};
pub use probability::{calculate_win_probabilities, model_class};
pub use reasoning::{automatic_reasoning, manual_reasoning};
pub use scoring::score_model;
pub use selector_impl::{ModelSelector, MAX_ALTERNATIVES};
pub use tree::{DecisionNode, DecisionTree, Predicate};
pub use types::{ModelClass, ModelSelection, ScoringDetails, SelectionMode, WinProbabilities};
