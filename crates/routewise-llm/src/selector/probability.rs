//! Win-probability weights per model class

use super::history::HistorySnapshot;
use super::types::{ModelClass, WinProbabilities};
use crate::analyzer::{PromptAnalysis, TaskType};
use crate::catalog::{ModelDescriptor, CLAUDE_3_SONNET};
use tracing::debug;

const BASE_STRONG: f64 = 0.7;
const BASE_WEAK: f64 = 0.3;
const BASE_CLAUDE: f64 = 0.5;

/// Compute normalized class weights for an analysis and the current streak
///
/// Each adjustment is an independent multiplication applied in a fixed
/// order: task type, then complexity, then the switch bias.
#[must_use]
pub fn calculate_win_probabilities(
    analysis: &PromptAnalysis,
    history: &HistorySnapshot,
) -> WinProbabilities {
    let mut strong = BASE_STRONG;
    let mut weak = BASE_WEAK;
    let mut claude = BASE_CLAUDE;

    match analysis.task_type {
        TaskType::Coding => {
            strong *= 1.5;
            claude *= 1.1;
            weak *= 0.7;
        }
        TaskType::Creative => {
            claude *= 1.4;
            strong *= 1.2;
            strong *= 1.1;
            weak *= 0.8;
        }
        TaskType::Reasoning => {
            strong *= 1.4;
            strong *= 1.5;
            claude *= 1.2;
            weak *= 0.7;
        }
        TaskType::General | TaskType::Mixed => {}
    }

    if analysis.complexity >= 8 {
        strong *= 1.5;
        weak *= 0.5;
    } else if analysis.complexity <= 3 {
        weak *= 1.4;
        strong *= 0.6;
    }

    if history.should_switch() {
        let last = history.last_model_id.as_str();
        if last.contains("gpt") {
            claude *= 1.3;
            strong *= 0.8;
        } else if last.contains("claude") {
            strong *= 1.3;
            claude *= 0.8;
        }
        debug!(
            last_model = last,
            consecutive_uses = history.consecutive_uses,
            "Biasing win probabilities toward a provider switch"
        );
    }

    let total = strong + weak + claude;
    WinProbabilities {
        strong: strong / total,
        weak: weak / total,
        claude: claude / total,
    }
}

/// Class of a model for alternative ranking
///
/// The strong check runs first, so Claude 3 Sonnet is strong, not Claude.
#[must_use]
pub fn model_class(model: &ModelDescriptor) -> ModelClass {
    if model.id.contains("gemini-2.0") || model.id == CLAUDE_3_SONNET {
        ModelClass::Strong
    } else if model.id.contains("claude") {
        ModelClass::Claude
    } else {
        ModelClass::Weak
    }
}
