//! Cost Estimation - token counts and monetary cost
//!
//! The token estimate is a fixed heuristic (`ceil(words * 1.3)`), not a real
//! tokenizer. It must stay stable so cost comparisons between models and
//! across runs remain comparable.

use crate::analyzer::ResponseLength;
use crate::catalog::ModelDescriptor;
use serde::{Deserialize, Serialize};

// 1.3 tokens per word, kept as a ratio so the ceiling is exact
const TOKENS_PER_TEN_WORDS: u64 = 13;

/// Output multiplier used in manual mode, where no analysis is run
pub const MANUAL_OUTPUT_MULTIPLIER: u32 = 5;

/// Input and estimated output token counts for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEstimates {
    /// Estimated prompt tokens
    pub input: u32,
    /// Estimated completion tokens
    pub estimated_output: u32,
}

impl TokenEstimates {
    /// Estimate tokens for `prompt`, scaling output by `multiplier`
    #[must_use]
    pub fn for_prompt(prompt: &str, multiplier: u32) -> Self {
        let input = estimate_token_count(prompt);
        Self {
            input,
            estimated_output: input.saturating_mul(multiplier),
        }
    }

    /// Estimate tokens using the analysis' expected response length
    #[must_use]
    pub fn for_response_length(prompt: &str, length: ResponseLength) -> Self {
        Self::for_prompt(prompt, length.output_multiplier())
    }

    /// Cost of these token counts on `model`
    #[must_use]
    pub fn cost_on(&self, model: &ModelDescriptor) -> f64 {
        calculate_estimated_cost(model, self.input, self.estimated_output)
    }
}

/// Approximate token count: `ceil(word_count * 1.3)`
#[must_use]
pub fn estimate_token_count(text: &str) -> u32 {
    let words = text.split_whitespace().count() as u64;
    let tokens = (words * TOKENS_PER_TEN_WORDS).div_ceil(10);
    u32::try_from(tokens).unwrap_or(u32::MAX)
}

/// Cost in USD of `input_tokens` in and `estimated_output_tokens` out
///
/// Unrounded; callers format for display.
#[must_use]
pub fn calculate_estimated_cost(
    model: &ModelDescriptor,
    input_tokens: u32,
    estimated_output_tokens: u32,
) -> f64 {
    f64::from(input_tokens) * model.cost_per_input_token
        + f64::from(estimated_output_tokens) * model.cost_per_output_token
}

/// Price per one million tokens, for display
#[must_use]
pub fn per_million(cost_per_token: f64) -> f64 {
    cost_per_token * 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CLAUDE_3_OPUS};

    #[test]
    fn test_estimate_token_count() {
        assert_eq!(estimate_token_count(""), 0);
        assert_eq!(estimate_token_count("hello"), 2);
        assert_eq!(estimate_token_count("What is the capital of France?"), 8);
        assert_eq!(estimate_token_count("one two three four five six seven eight nine ten"), 13);
        // runs of whitespace count as one separator
        assert_eq!(estimate_token_count("  a \n\t b  "), 3);
    }

    #[test]
    fn test_estimate_is_monotonic_in_word_count() {
        let mut previous = 0;
        let mut text = String::new();
        for _ in 0..200 {
            text.push_str("word ");
            let count = estimate_token_count(&text);
            assert!(count >= previous);
            previous = count;
        }
    }

    #[test]
    fn test_zero_tokens_cost_nothing() {
        for model in Catalog::builtin().models() {
            assert_eq!(calculate_estimated_cost(model, 0, 0), 0.0, "{}", model.id);
        }
    }

    #[test]
    fn test_calculate_estimated_cost() {
        let opus = Catalog::builtin().require(CLAUDE_3_OPUS).unwrap();
        // 8 * 0.000015 + 16 * 0.000075
        let cost = calculate_estimated_cost(opus, 8, 16);
        assert!((cost - 0.00132).abs() < 1e-12);
    }

    #[test]
    fn test_token_estimates_multipliers() {
        let prompt = "What is the capital of France?";
        let short = TokenEstimates::for_response_length(prompt, ResponseLength::Short);
        assert_eq!(short, TokenEstimates { input: 8, estimated_output: 16 });

        let long = TokenEstimates::for_response_length(prompt, ResponseLength::Long);
        assert_eq!(long.estimated_output, 80);

        let manual = TokenEstimates::for_prompt(prompt, MANUAL_OUTPUT_MULTIPLIER);
        assert_eq!(manual.estimated_output, 40);
    }

    #[test]
    fn test_per_million() {
        assert!((per_million(0.000_015) - 15.0).abs() < 1e-9);
    }
}
