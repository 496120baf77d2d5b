//! Confidence score for a selected model

use crate::analyzer::{PromptAnalysis, TaskType};
use crate::catalog::{
    ModelDescriptor, CLAUDE_3_HAIKU, CLAUDE_3_OPUS, CLAUDE_3_SONNET, MISTRAL_MEDIUM, MISTRAL_SMALL,
};

/// Confidence reported for manual selections
pub const MANUAL_CONFIDENCE: f64 = 1.0;

const DEEPSEEK_GENERAL_BOOST: f64 = 0.1;

/// Tiered base confidence by complexity band and chosen model
#[must_use]
pub fn base_confidence(model_id: &str, complexity: u8) -> f64 {
    if complexity >= 8 {
        match model_id {
            CLAUDE_3_OPUS => 0.98,
            CLAUDE_3_SONNET => 0.95,
            MISTRAL_MEDIUM => 0.88,
            _ => 0.80,
        }
    } else if complexity <= 3 {
        match model_id {
            CLAUDE_3_HAIKU => 0.95,
            MISTRAL_SMALL => 0.9,
            _ => 0.85,
        }
    } else {
        match model_id {
            CLAUDE_3_SONNET => 0.9,
            MISTRAL_MEDIUM => 0.85,
            _ => 0.8,
        }
    }
}

/// Capability-weighted fit of a model for a task type
///
/// General tasks score 0 here; the Deepseek boost in [`confidence_score`]
/// covers them instead.
#[must_use]
pub fn task_type_score(model: &ModelDescriptor, task_type: TaskType) -> f64 {
    let caps = &model.capabilities;
    match task_type {
        TaskType::General => 0.0,
        TaskType::Reasoning => f64::from(caps.reasoning) * 2.0,
        TaskType::Creative => f64::from(caps.creative) * 2.0,
        TaskType::Coding => f64::from(caps.coding) * 2.0,
        TaskType::Mixed => f64::from(caps.total()) / 2.0,
    }
}

/// Confidence in `0.0..=1.0` for an automatic selection
#[must_use]
pub fn confidence_score(model: &ModelDescriptor, analysis: &PromptAnalysis) -> f64 {
    let base = base_confidence(&model.id, analysis.complexity);
    let task_match = task_type_score(model, analysis.task_type) / 15.0;
    let mut confidence = (base + task_match) / 2.0;

    if analysis.task_type == TaskType::General && model.name.contains("Deepseek") {
        confidence = (confidence + DEEPSEEK_GENERAL_BOOST).min(1.0);
    }

    confidence.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_prompt;
    use crate::catalog::{Catalog, DEEPSEEK_R1};

    fn model(id: &str) -> &'static ModelDescriptor {
        Catalog::builtin().require(id).unwrap()
    }

    #[test]
    fn test_base_confidence_bands() {
        assert_eq!(base_confidence(CLAUDE_3_OPUS, 9), 0.98);
        assert_eq!(base_confidence(MISTRAL_MEDIUM, 8), 0.88);
        assert_eq!(base_confidence(CLAUDE_3_HAIKU, 9), 0.80);
        assert_eq!(base_confidence(CLAUDE_3_HAIKU, 2), 0.95);
        assert_eq!(base_confidence(MISTRAL_SMALL, 3), 0.9);
        assert_eq!(base_confidence(CLAUDE_3_SONNET, 5), 0.9);
        assert_eq!(base_confidence(DEEPSEEK_R1, 5), 0.8);
    }

    #[test]
    fn test_deepseek_general_boost() {
        let analysis = analyze_prompt("What is the capital of France?");
        let confidence = confidence_score(model(DEEPSEEK_R1), &analysis);
        // (0.85 + 0) / 2 + 0.1
        assert!((confidence - 0.525).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_task_uses_half_capability_total() {
        let analysis = analyze_prompt("Tell me a joke");
        let haiku = model(CLAUDE_3_HAIKU);
        let expected = (0.95 + f64::from(haiku.capabilities.total()) / 2.0 / 15.0) / 2.0;
        assert!((confidence_score(haiku, &analysis) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let analysis = analyze_prompt("Write a JavaScript function to reverse a string");
        let confidence = confidence_score(model(CLAUDE_3_OPUS), &analysis);
        assert_eq!(confidence, 1.0);
    }
}
