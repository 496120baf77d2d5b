//! Prompt router - analyze, select, then generate
//!
//! Thin facade over the analyzer, the selector and a [`ResponseGateway`].
//! It does not retry and never substitutes another model on failure.

use crate::analyzer::analyze_prompt;
use crate::error::Result;
use crate::gateway::ResponseGateway;
use crate::selector::{ModelSelection, ModelSelector, SelectionMode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

/// Generated answer together with the selection that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedResponse {
    /// How the model was chosen
    pub selection: ModelSelection,
    /// Model output
    pub content: String,
}

/// Routes prompts to models and fetches their answers
pub struct PromptRouter {
    selector: Arc<ModelSelector>,
    gateway: Arc<dyn ResponseGateway>,
}

impl PromptRouter {
    /// Create a router
    #[must_use]
    pub fn new(selector: Arc<ModelSelector>, gateway: Arc<dyn ResponseGateway>) -> Self {
        Self { selector, gateway }
    }

    /// Underlying selector
    #[must_use]
    pub fn selector(&self) -> &ModelSelector {
        &self.selector
    }

    /// Analyze `prompt` and select a model without calling any provider
    ///
    /// # Errors
    /// Returns [`crate::Error::ModelNotFound`] for an unknown manual model.
    pub fn route(&self, prompt: &str, mode: &SelectionMode) -> Result<ModelSelection> {
        let analysis = analyze_prompt(prompt);
        self.selector.select(prompt, &analysis, mode)
    }

    /// Select a model and generate its answer
    ///
    /// # Errors
    /// Selection errors, and gateway errors unchanged (including
    /// [`crate::Error::Cancelled`] when `cancel` fires).
    #[instrument(skip(self, prompt, cancel))]
    pub async fn respond(
        &self,
        prompt: &str,
        mode: &SelectionMode,
        cancel: &CancellationToken,
    ) -> Result<RoutedResponse> {
        let selection = self.route(prompt, mode)?;
        let model = &selection.selected_model;

        match self.gateway.generate(model, prompt, cancel).await {
            Ok(content) => {
                info!(
                    model = %model.id,
                    gateway = self.gateway.name(),
                    chars = content.len(),
                    "Response generated"
                );
                Ok(RoutedResponse { selection, content })
            }
            Err(e) => {
                warn!(model = %model.id, error = %e, "Response generation failed");
                Err(e)
            }
        }
    }
}
