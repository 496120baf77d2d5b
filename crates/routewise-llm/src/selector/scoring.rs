//! Heuristic fit score of one model for one prompt
//!
//! Display only. The decision tree picks the model; this breakdown explains
//! how well the pick lines up with the analysis.

use super::types::ScoringDetails;
use crate::analyzer::{PromptAnalysis, TaskType, TimeSensitivity};
use crate::catalog::ModelDescriptor;

const DEEPSEEK_GENERAL_BONUS: f64 = 15.0;
const DOMAIN_BONUS: f64 = 5.0;

/// Score `model` against `analysis`
#[must_use]
pub fn score_model(model: &ModelDescriptor, analysis: &PromptAnalysis) -> ScoringDetails {
    let caps = &model.capabilities;
    let reasoning = f64::from(caps.reasoning);
    let factual = f64::from(caps.factual);

    let task_type_score = match analysis.task_type {
        TaskType::General => {
            let bonus = if model.name.contains("Deepseek") {
                DEEPSEEK_GENERAL_BONUS
            } else {
                0.0
            };
            factual * 2.0 + bonus
        }
        TaskType::Reasoning => reasoning * 2.0,
        TaskType::Creative => f64::from(caps.creative) * 2.0,
        TaskType::Coding => f64::from(caps.coding) * 2.0,
        TaskType::Mixed => f64::from(caps.total()) / 2.0,
    };

    let complexity_score = if analysis.complexity <= 5 {
        10.0 - (5.0 - reasoning).abs()
    } else {
        reasoning
    };

    let expertise_score =
        (reasoning + factual).min(10.0) * f64::from(analysis.expertise_required) / 10.0;

    // Faster than 2s earns points, slower loses them
    let time_score = if analysis.time_sensitivity == TimeSensitivity::High {
        (2000.0 - f64::from(model.latency)) / 200.0
    } else {
        0.0
    };

    let accuracy_score = if analysis.accuracy_requirement >= 8 {
        factual
    } else {
        0.0
    };

    let domain_bonus = if model.specializes_in(analysis.domain.as_str()) {
        DOMAIN_BONUS
    } else {
        0.0
    };

    ScoringDetails {
        task_type_score,
        complexity_score,
        expertise_score,
        time_score,
        accuracy_score,
        domain_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_prompt;
    use crate::catalog::{Catalog, CLAUDE_3_OPUS, DEEPSEEK_R1};

    #[test]
    fn test_general_prompt_favors_deepseek() {
        let catalog = Catalog::builtin();
        let analysis = analyze_prompt("What is the capital of France?");
        let deepseek = score_model(catalog.require(DEEPSEEK_R1).unwrap(), &analysis);

        // factual 9 * 2 + 15
        assert_eq!(deepseek.task_type_score, 33.0);
        // complexity 1: 10 - |5 - 9|
        assert_eq!(deepseek.complexity_score, 6.0);
        // min(10, 18) * 2 / 10
        assert!((deepseek.expertise_score - 2.0).abs() < 1e-9);
        assert_eq!(deepseek.time_score, 0.0);
        // accuracy 8 adds factual
        assert_eq!(deepseek.accuracy_score, 9.0);

        let opus = score_model(catalog.require(CLAUDE_3_OPUS).unwrap(), &analysis);
        assert!(deepseek.total() > opus.total());
    }

    #[test]
    fn test_coding_prompt_breakdown() {
        let opus = Catalog::builtin().require(CLAUDE_3_OPUS).unwrap();
        let analysis = analyze_prompt("Write a JavaScript function to reverse a string");
        let details = score_model(opus, &analysis);

        assert_eq!(details.task_type_score, 20.0);
        // complexity 9 uses raw reasoning
        assert_eq!(details.complexity_score, 10.0);
        assert_eq!(details.expertise_score, 10.0);
        assert_eq!(details.accuracy_score, 10.0);
    }

    #[test]
    fn test_urgent_prompt_rewards_low_latency() {
        let opus = Catalog::builtin().require(CLAUDE_3_OPUS).unwrap();
        let analysis = analyze_prompt("I need this urgently");
        assert_eq!(analysis.time_sensitivity, TimeSensitivity::High);

        let details = score_model(opus, &analysis);
        let expected = (2000.0 - f64::from(opus.latency)) / 200.0;
        assert!((details.time_score - expected).abs() < 1e-9);
    }
}
