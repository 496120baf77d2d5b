//! Model Catalog - static registry of candidate backends
//!
//! The catalog is loaded once and never mutated. Every other component looks
//! models up here by their stable id.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

// ============================================================================
// Well-known model ids
// ============================================================================

/// Deepseek R1 (distilled Llama 70B) via OpenRouter
pub const DEEPSEEK_R1: &str = "deepseek/deepseek-r1-distill-llama-70b:free";
/// Claude 3 Opus via OpenRouter
pub const CLAUDE_3_OPUS: &str = "anthropic/claude-3-opus";
/// Claude 3 Sonnet via OpenRouter
pub const CLAUDE_3_SONNET: &str = "anthropic/claude-3-sonnet";
/// Claude 3 Haiku via OpenRouter
pub const CLAUDE_3_HAIKU: &str = "anthropic/claude-3-haiku";
/// Mistral Medium (native Mistral API)
pub const MISTRAL_MEDIUM: &str = "mistral-medium";
/// Mistral Small (native Mistral API)
pub const MISTRAL_SMALL: &str = "mistral-small";

// ============================================================================
// Descriptor types
// ============================================================================

/// Backend family a model is served by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Google Generative Language API
    Google,
    /// Mistral La Plateforme
    Mistral,
    /// Nebius AI Studio
    Nebius,
    /// OpenRouter multi-provider gateway
    OpenRouter,
}

impl Provider {
    /// Display name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Mistral => "Mistral",
            Self::Nebius => "Nebius",
            Self::OpenRouter => "OpenRouter",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse price/quality bucket
///
/// Informational: used for display grouping and reasoning text, never as a
/// selection input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    /// Cheap, fast models for basic tasks
    Low,
    /// Balanced models
    Medium,
    /// Premium models
    Flagship,
}

impl ModelTier {
    /// All tiers, cheapest first
    pub const ALL: [ModelTier; 3] = [ModelTier::Low, ModelTier::Medium, ModelTier::Flagship];

    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::Flagship => "Flagship",
        }
    }
}

/// Capability scores, each in `1..=10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Multi-step reasoning
    pub reasoning: u8,
    /// Factual recall
    pub factual: u8,
    /// Creative writing
    pub creative: u8,
    /// Code generation
    pub coding: u8,
}

impl Capabilities {
    const fn uniform(score: u8) -> Self {
        Self {
            reasoning: score,
            factual: score,
            creative: score,
            coding: score,
        }
    }

    /// Sum of all four scores
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::from(self.reasoning)
            + u32::from(self.factual)
            + u32::from(self.creative)
            + u32::from(self.coding)
    }
}

/// Immutable description of one candidate model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Stable unique id (also the provider-side model name)
    pub id: String,
    /// Display name
    pub name: String,
    /// Backend family
    pub provider: Provider,
    /// Cost per input token (USD)
    pub cost_per_input_token: f64,
    /// Cost per output token (USD)
    pub cost_per_output_token: f64,
    /// Context window size (informational)
    pub max_tokens: u32,
    /// Capability scores
    pub capabilities: Capabilities,
    /// Expected response time in milliseconds
    pub latency: u32,
    /// Free-text specialization labels
    pub specializations: Vec<String>,
    /// Price/quality bucket
    pub tier: ModelTier,
}

impl ModelDescriptor {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        name: &str,
        provider: Provider,
        cost_per_input_token: f64,
        cost_per_output_token: f64,
        max_tokens: u32,
        capabilities: Capabilities,
        latency: u32,
        specializations: &[&str],
        tier: ModelTier,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            provider,
            cost_per_input_token,
            cost_per_output_token,
            max_tokens,
            capabilities,
            latency,
            specializations: specializations.iter().map(|s| (*s).to_string()).collect(),
            tier,
        }
    }

    /// Whether any specialization mentions `label` (case-insensitive substring)
    #[must_use]
    pub fn specializes_in(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.specializations
            .iter()
            .any(|spec| spec.to_lowercase().contains(&label))
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Validated, ordered set of model descriptors
#[derive(Debug, Clone)]
pub struct Catalog {
    models: Vec<ModelDescriptor>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    models: builtin_models(),
});

impl Catalog {
    /// Build a catalog, rejecting empty input and duplicate ids
    ///
    /// # Errors
    /// Returns [`Error::InvalidCatalog`] when the invariants do not hold.
    pub fn new(models: Vec<ModelDescriptor>) -> Result<Self> {
        if models.is_empty() {
            return Err(Error::InvalidCatalog("catalog is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for model in &models {
            if !seen.insert(model.id.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate model id: {}",
                    model.id
                )));
            }
        }
        Ok(Self { models })
    }

    /// The built-in catalog shipped with the crate
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All models in catalog order
    #[must_use]
    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    /// First model in catalog order (manual-mode fallback)
    #[must_use]
    pub fn first(&self) -> &ModelDescriptor {
        // Non-emptiness is checked in `new` and holds for the builtin list.
        &self.models[0]
    }

    /// Look up a model by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Look up a model by id, failing with [`Error::ModelNotFound`]
    ///
    /// # Errors
    /// Returns an error when no model has the given id.
    pub fn require(&self, id: &str) -> Result<&ModelDescriptor> {
        self.get(id)
            .ok_or_else(|| Error::ModelNotFound(id.to_string()))
    }

    /// Models belonging to a tier, in catalog order
    pub fn by_tier(&self, tier: ModelTier) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.iter().filter(move |m| m.tier == tier)
    }

    /// Number of models
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Always false for a validated catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn builtin_models() -> Vec<ModelDescriptor> {
    use ModelTier::{Flagship, Low, Medium};
    use Provider::{Google, Mistral, OpenRouter};

    vec![
        ModelDescriptor::new(
            "moonshotai/moonlight-16b-a3b-instruct:free",
            "Moonshot AI",
            OpenRouter,
            0.000_002,
            0.000_006,
            32_768,
            Capabilities::uniform(8),
            800,
            &["balanced performance", "general tasks", "reasoning"],
            Medium,
        ),
        ModelDescriptor::new(
            "nousresearch/deephermes-3-llama-3-8b-preview:free",
            "Llama 3 8B",
            OpenRouter,
            0.000_000_5,
            0.000_001_5,
            16_385,
            Capabilities::uniform(7),
            500,
            &["fast responses", "basic tasks", "cost-effective"],
            Low,
        ),
        ModelDescriptor::new(
            "microsoft/phi-3-mini-128k-instruct:free",
            "Phi 3 Mini",
            OpenRouter,
            0.000_000_5,
            0.000_001_5,
            128_000,
            Capabilities::uniform(7),
            500,
            &["fast responses", "basic tasks", "cost-effective"],
            Low,
        ),
        ModelDescriptor::new(
            "microsoft/phi-3-medium-128k-instruct:free",
            "Phi 3 Medium",
            OpenRouter,
            0.000_002,
            0.000_006,
            128_000,
            Capabilities::uniform(8),
            700,
            &["balanced performance", "general tasks", "coding"],
            Medium,
        ),
        ModelDescriptor::new(
            "gemini-2.0-flash",
            "Gemini 2.0 Flash",
            Google,
            0.000_001,
            0.000_003,
            128_000,
            Capabilities {
                reasoning: 10,
                factual: 9,
                creative: 8,
                coding: 10,
            },
            600,
            &["fast responses", "coding", "reasoning"],
            Medium,
        ),
        ModelDescriptor::new(
            "gemini-2.0-flash-lite",
            "Gemini 2.0 Flash-Lite",
            Google,
            0.000_000_75,
            0.000_002_25,
            128_000,
            Capabilities {
                reasoning: 8,
                factual: 8,
                creative: 7,
                coding: 8,
            },
            400,
            &["fast responses", "efficient", "cost-effective"],
            Low,
        ),
        ModelDescriptor::new(
            "gemini-2.0-flash-experimental",
            "Gemini 2.0 Flash Experimental",
            Google,
            0.000_001_5,
            0.000_004_5,
            128_000,
            Capabilities {
                reasoning: 10,
                factual: 10,
                creative: 9,
                coding: 10,
            },
            800,
            &[
                "advanced features",
                "experimental capabilities",
                "cutting-edge",
            ],
            Flagship,
        ),
        ModelDescriptor::new(
            MISTRAL_MEDIUM,
            "Mistral Medium",
            Mistral,
            0.000_002_67,
            0.000_008,
            32_768,
            Capabilities {
                reasoning: 9,
                factual: 8,
                creative: 8,
                coding: 9,
            },
            900,
            &["reasoning", "coding", "complex problem solving"],
            Medium,
        ),
        ModelDescriptor::new(
            MISTRAL_SMALL,
            "Mistral Small",
            Mistral,
            0.000_002,
            0.000_006,
            32_768,
            Capabilities {
                reasoning: 7,
                factual: 7,
                creative: 6,
                coding: 7,
            },
            700,
            &["efficient responses", "basic tasks"],
            Low,
        ),
        ModelDescriptor::new(
            DEEPSEEK_R1,
            "Deepseek R1",
            OpenRouter,
            0.000_002,
            0.000_006,
            32_768,
            Capabilities {
                reasoning: 9,
                factual: 9,
                creative: 8,
                coding: 9,
            },
            900,
            &["balanced performance", "reasoning", "coding"],
            Medium,
        ),
        ModelDescriptor::new(
            CLAUDE_3_SONNET,
            "Claude 3 Sonnet",
            OpenRouter,
            0.000_003,
            0.000_015,
            200_000,
            Capabilities {
                reasoning: 10,
                factual: 9,
                creative: 9,
                coding: 9,
            },
            1000,
            &[
                "balanced performance",
                "creative writing",
                "detailed explanations",
            ],
            Medium,
        ),
        ModelDescriptor::new(
            CLAUDE_3_HAIKU,
            "Claude 3 Haiku",
            OpenRouter,
            0.000_000_25,
            0.000_001_25,
            200_000,
            Capabilities {
                reasoning: 7,
                factual: 8,
                creative: 7,
                coding: 7,
            },
            500,
            &["fast responses", "efficient", "cost-effective"],
            Low,
        ),
        ModelDescriptor::new(
            CLAUDE_3_OPUS,
            "Claude 3 Opus",
            OpenRouter,
            0.000_015,
            0.000_075,
            200_000,
            Capabilities::uniform(10),
            1200,
            &[
                "complex reasoning",
                "high accuracy",
                "premium performance",
            ],
            Flagship,
        ),
        ModelDescriptor::new(
            "mistral-large",
            "Mistral Large",
            Mistral,
            0.000_008,
            0.000_024,
            32_768,
            Capabilities {
                reasoning: 10,
                factual: 9,
                creative: 9,
                coding: 10,
            },
            1100,
            &["advanced reasoning", "complex tasks", "coding excellence"],
            Flagship,
        ),
        ModelDescriptor::new(
            "openai/gpt-4-turbo",
            "GPT-4 Turbo",
            OpenRouter,
            0.000_01,
            0.000_03,
            128_000,
            Capabilities {
                reasoning: 10,
                factual: 10,
                creative: 9,
                coding: 10,
            },
            1000,
            &["advanced reasoning", "complex tasks", "coding excellence"],
            Flagship,
        ),
        ModelDescriptor::new(
            "openai/gpt-4-32k",
            "GPT-4 32K",
            OpenRouter,
            0.000_06,
            0.000_12,
            32_768,
            Capabilities {
                reasoning: 10,
                factual: 10,
                creative: 9,
                coding: 10,
            },
            1100,
            &["long context", "advanced reasoning", "premium performance"],
            Flagship,
        ),
        ModelDescriptor::new(
            "openai/gpt-3.5-turbo",
            "GPT-3.5 Turbo",
            OpenRouter,
            0.000_000_5,
            0.000_001_5,
            16_385,
            Capabilities {
                reasoning: 7,
                factual: 8,
                creative: 7,
                coding: 7,
            },
            500,
            &["fast responses", "basic tasks", "cost-effective"],
            Low,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_invariants() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 17);
        assert!(!catalog.is_empty());

        let rebuilt = Catalog::new(catalog.models().to_vec());
        assert!(rebuilt.is_ok(), "builtin catalog must have unique ids");
    }

    #[test]
    fn test_capability_scores_in_range() {
        for model in Catalog::builtin().models() {
            let caps = model.capabilities;
            for score in [caps.reasoning, caps.factual, caps.creative, caps.coding] {
                assert!((1..=10).contains(&score), "{} out of range", model.id);
            }
            assert!(model.latency > 0);
            assert!(model.max_tokens > 0);
            assert!(model.cost_per_input_token >= 0.0);
            assert!(model.cost_per_output_token >= 0.0);
        }
    }

    #[test]
    fn test_well_known_ids_present() {
        let catalog = Catalog::builtin();
        for id in [
            DEEPSEEK_R1,
            CLAUDE_3_OPUS,
            CLAUDE_3_SONNET,
            CLAUDE_3_HAIKU,
            MISTRAL_MEDIUM,
            MISTRAL_SMALL,
        ] {
            assert!(catalog.get(id).is_some(), "missing {id}");
        }
        assert_eq!(catalog.first().name, "Moonshot AI");
    }

    #[test]
    fn test_require_unknown_model() {
        let err = Catalog::builtin().require("no-such-model").unwrap_err();
        assert!(matches!(err, Error::ModelNotFound(id) if id == "no-such-model"));
    }

    #[test]
    fn test_new_rejects_empty_and_duplicates() {
        assert!(matches!(
            Catalog::new(Vec::new()),
            Err(Error::InvalidCatalog(_))
        ));

        let haiku = Catalog::builtin().require(CLAUDE_3_HAIKU).unwrap().clone();
        let err = Catalog::new(vec![haiku.clone(), haiku]).unwrap_err();
        assert!(err.to_string().contains("duplicate model id"));
    }

    #[test]
    fn test_by_tier_grouping() {
        let catalog = Catalog::builtin();
        let flagship: Vec<_> = catalog
            .by_tier(ModelTier::Flagship)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(
            flagship,
            vec![
                "Gemini 2.0 Flash Experimental",
                "Claude 3 Opus",
                "Mistral Large",
                "GPT-4 Turbo",
                "GPT-4 32K"
            ]
        );
        let total: usize = ModelTier::ALL
            .iter()
            .map(|tier| catalog.by_tier(*tier).count())
            .sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_specializes_in() {
        let sonnet = Catalog::builtin().require(CLAUDE_3_SONNET).unwrap();
        assert!(sonnet.specializes_in("creative"));
        assert!(!sonnet.specializes_in("coding"));
        assert!(!sonnet.specializes_in("general"));
    }
}
