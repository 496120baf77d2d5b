//! Core types for model selection

use crate::catalog::ModelDescriptor;
use crate::cost::TokenEstimates;
use serde::{Deserialize, Serialize};

// ============================================================================
// Selection Mode
// ============================================================================

/// How the caller wants the model chosen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Run the analyzer-driven pipeline
    #[default]
    Auto,
    /// Use the given model id, or the catalog's first model when `None`
    Manual(Option<String>),
}

impl SelectionMode {
    /// Manual mode for a specific model
    #[must_use]
    pub fn manual(model_id: impl Into<String>) -> Self {
        Self::Manual(Some(model_id.into()))
    }
}

// ============================================================================
// Win Probabilities
// ============================================================================

/// Model class used for ranking alternatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelClass {
    /// Gemini 2.0 family and Claude 3 Sonnet
    Strong,
    /// Everything not strong or Claude
    Weak,
    /// Remaining Claude 3 models
    Claude,
}

/// Normalized heuristic weights per model class
///
/// Not calibrated probabilities; they only order the alternatives shown to
/// the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinProbabilities {
    /// Strong-class weight
    pub strong: f64,
    /// Weak-class weight
    pub weak: f64,
    /// Claude-class weight
    pub claude: f64,
}

impl WinProbabilities {
    /// Weight of one class
    #[must_use]
    pub fn for_class(&self, class: ModelClass) -> f64 {
        match class {
            ModelClass::Strong => self.strong,
            ModelClass::Weak => self.weak,
            ModelClass::Claude => self.claude,
        }
    }

    /// Sum of the three weights (1.0 after normalization)
    #[must_use]
    pub fn total(&self) -> f64 {
        self.strong + self.weak + self.claude
    }
}

// ============================================================================
// Scoring Details
// ============================================================================

/// Breakdown of the heuristic fit score of one model for one prompt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringDetails {
    /// Capability matching the task type
    pub task_type_score: f64,
    /// Reasoning capability relative to complexity
    pub complexity_score: f64,
    /// Capability weighted by expertise required
    pub expertise_score: f64,
    /// Speed bonus for urgent prompts
    pub time_score: f64,
    /// Factual bonus for high-accuracy prompts
    pub accuracy_score: f64,
    /// Specialization matches the detected domain
    pub domain_bonus: f64,
}

impl ScoringDetails {
    /// Sum of all parts
    #[must_use]
    pub fn total(&self) -> f64 {
        self.task_type_score
            + self.complexity_score
            + self.expertise_score
            + self.time_score
            + self.accuracy_score
            + self.domain_bonus
    }
}

// ============================================================================
// Model Selection
// ============================================================================

/// Outcome of selecting a model for one prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSelection {
    /// Chosen model
    pub selected_model: ModelDescriptor,
    /// Estimated cost in USD
    pub estimated_cost: f64,
    /// Confidence in `0.0..=1.0`
    pub confidence_score: f64,
    /// Up to three other models, best first
    pub alternatives: Vec<ModelDescriptor>,
    /// Human-readable explanation
    pub reasoning: String,
    /// Token counts behind the cost
    pub token_estimates: TokenEstimates,
    /// Whether the model was picked manually
    pub manual: bool,
    /// Class weights used for ranking (automatic mode only)
    pub win_probabilities: Option<WinProbabilities>,
    /// Heuristic fit of the selected model (automatic mode only)
    pub scoring_details: Option<ScoringDetails>,
}
