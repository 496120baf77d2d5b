//! Human-readable explanation of a selection
//!
//! Pure formatting over already-computed values. Nothing here feeds back
//! into the decision.

use super::types::WinProbabilities;
use crate::analyzer::{PromptAnalysis, TaskType};
use crate::catalog::ModelDescriptor;
use crate::cost::TokenEstimates;

/// Explanation for an automatic selection
#[must_use]
pub fn automatic_reasoning(
    model: &ModelDescriptor,
    analysis: &PromptAnalysis,
    tokens: &TokenEstimates,
    estimated_cost: f64,
    probabilities: &WinProbabilities,
) -> String {
    let mut text = format!(
        "Selected {} ({}, {} tier) for this {} task.\n\n",
        model.name,
        model.provider,
        model.tier.label(),
        analysis.task_type
    );

    text.push_str(&task_paragraph(analysis));
    text.push_str("\n\n");
    text.push_str(&cost_line(tokens, estimated_cost));
    text.push_str("\n\n");

    text.push_str("Selection criteria:\n");
    text.push_str(&format!("• Task type: {}\n", analysis.task_type));
    text.push_str(&format!("• Complexity: {}/10\n", analysis.complexity));
    text.push_str(&format!("• Expertise required: {}/10\n", analysis.expertise_required));
    text.push_str(&format!("• Accuracy requirement: {}/10\n", analysis.accuracy_requirement));
    text.push('\n');

    text.push_str("Win probabilities:\n");
    text.push_str(&format!("• Strong models: {}\n", percent(probabilities.strong)));
    text.push_str(&format!("• Claude 3 models: {}\n", percent(probabilities.claude)));
    text.push_str(&format!("• Weak models: {}\n", percent(probabilities.weak)));

    text
}

/// Explanation for a manual selection
#[must_use]
pub fn manual_reasoning(
    model: &ModelDescriptor,
    tokens: &TokenEstimates,
    estimated_cost: f64,
) -> String {
    format!(
        "Using manually selected model: {} ({}).\n\n{}\n",
        model.name,
        model.provider,
        cost_line(tokens, estimated_cost)
    )
}

fn task_paragraph(analysis: &PromptAnalysis) -> String {
    let complexity = analysis.complexity;
    let (opening, detail) = match analysis.task_type {
        TaskType::Coding => (
            "This is a coding-focused task",
            if complexity >= 7 {
                "Due to the high complexity and specialized requirements, selecting a model with advanced coding capabilities and technical expertise."
            } else {
                "Selecting a model with strong coding abilities while maintaining cost efficiency."
            },
        ),
        TaskType::Creative => (
            "This is a creative writing/generation task",
            if complexity >= 7 {
                "Due to the advanced creative requirements, selecting a model with exceptional creative and narrative capabilities."
            } else {
                "Choosing a model that balances creative abilities with cost optimization."
            },
        ),
        TaskType::General => (
            "This is a general query",
            if complexity <= 3 {
                "Straightforward general queries go to a fast, low-cost model."
            } else {
                "Selecting a model for comprehensive and accurate responses."
            },
        ),
        TaskType::Reasoning => (
            "This is an analytical reasoning task",
            if complexity >= 7 {
                "Due to the complex analysis required, selecting a model with superior reasoning and analytical capabilities."
            } else {
                "Choosing a model that provides strong reasoning abilities while maintaining cost efficiency."
            },
        ),
        TaskType::Mixed => (
            "This is a multi-faceted task",
            "Selecting a versatile model with balanced capabilities.",
        ),
    };
    format!("{opening} with complexity {complexity}/10. {detail}")
}

fn cost_line(tokens: &TokenEstimates, estimated_cost: f64) -> String {
    format!(
        "Estimated cost: ${estimated_cost:.6} ({} input tokens, ~{} output tokens).",
        tokens.input, tokens.estimated_output
    )
}

fn percent(weight: f64) -> String {
    format!("{:.1}%", weight * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_prompt;
    use crate::catalog::{Catalog, CLAUDE_3_OPUS};

    #[test]
    fn test_automatic_reasoning_structure() {
        let opus = Catalog::builtin().require(CLAUDE_3_OPUS).unwrap();
        let analysis = analyze_prompt("Write a JavaScript function to reverse a string");
        let tokens = TokenEstimates {
            input: 10,
            estimated_output: 50,
        };
        let probabilities = WinProbabilities {
            strong: 0.5,
            weak: 0.25,
            claude: 0.25,
        };

        let text = automatic_reasoning(opus, &analysis, &tokens, 0.003_9, &probabilities);

        assert!(text.starts_with("Selected Claude 3 Opus"));
        assert!(text.contains("coding-focused task with complexity 9/10"));
        assert!(text.contains("advanced coding capabilities"));
        assert!(text.contains("Estimated cost: $0.003900 (10 input tokens, ~50 output tokens)."));
        assert!(text.contains("• Task type: coding\n"));
        assert!(text.contains("• Complexity: 9/10\n"));
        assert!(text.contains("• Expertise required: 10/10\n"));
        assert!(text.contains("• Accuracy requirement: 9/10\n"));
        assert!(text.contains("• Strong models: 50.0%\n"));
        assert!(text.contains("• Claude 3 models: 25.0%\n"));
        assert!(text.contains("• Weak models: 25.0%\n"));
    }

    #[test]
    fn test_manual_reasoning() {
        let opus = Catalog::builtin().require(CLAUDE_3_OPUS).unwrap();
        let tokens = TokenEstimates {
            input: 8,
            estimated_output: 40,
        };
        let text = manual_reasoning(opus, &tokens, 0.00312);

        assert!(text.starts_with("Using manually selected model: Claude 3 Opus"));
        assert!(text.contains("$0.003120"));
        assert!(!text.contains("Win probabilities"));
    }

    #[test]
    fn test_mixed_paragraph_ignores_complexity_band() {
        let analysis = analyze_prompt("Tell me a joke");
        assert!(task_paragraph(&analysis).ends_with("balanced capabilities."));
    }
}
