//! Model selector implementation

use super::confidence::{confidence_score, MANUAL_CONFIDENCE};
use super::history::UsageHistory;
use super::probability::{calculate_win_probabilities, model_class};
use super::reasoning::{automatic_reasoning, manual_reasoning};
use super::scoring::score_model;
use super::tree::DecisionTree;
use super::types::{ModelSelection, SelectionMode, WinProbabilities};
use crate::analyzer::PromptAnalysis;
use crate::catalog::{Catalog, ModelDescriptor};
use crate::cost::{TokenEstimates, MANUAL_OUTPUT_MULTIPLIER};
use crate::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Number of alternatives offered next to the selected model
pub const MAX_ALTERNATIVES: usize = 3;

/// Picks a model for each prompt
///
/// Owns the catalog and the validated decision tree. The usage history is
/// shared, so several selectors (or several tasks holding one selector)
/// nudge against the same streak.
#[derive(Debug)]
pub struct ModelSelector {
    catalog: Catalog,
    tree: DecisionTree,
    history: Arc<UsageHistory>,
}

impl ModelSelector {
    /// Create a selector over `catalog` with the standard decision tree
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCatalog`] when the tree references a
    /// model the catalog lacks.
    pub fn new(catalog: Catalog, history: Arc<UsageHistory>) -> Result<Self> {
        let tree = DecisionTree::standard(&catalog)?;
        Ok(Self {
            catalog,
            tree,
            history,
        })
    }

    /// Create a selector over the builtin catalog
    ///
    /// # Errors
    /// Fails only if the builtin catalog and tree fall out of sync.
    pub fn with_builtin_catalog(history: Arc<UsageHistory>) -> Result<Self> {
        Self::new(Catalog::builtin().clone(), history)
    }

    /// Replace the decision tree
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCatalog`] when `tree` was built for a
    /// different catalog.
    pub fn with_tree(mut self, tree: DecisionTree) -> Result<Self> {
        self.tree = DecisionTree::new(tree.root().clone(), &self.catalog)?;
        Ok(self)
    }

    /// Catalog used for lookups
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared usage history
    #[must_use]
    pub fn history(&self) -> &Arc<UsageHistory> {
        &self.history
    }

    /// Select a model according to `mode`
    ///
    /// # Errors
    /// Returns [`crate::Error::ModelNotFound`] when a manual model id is not
    /// in the catalog.
    pub fn select(
        &self,
        prompt: &str,
        analysis: &PromptAnalysis,
        mode: &SelectionMode,
    ) -> Result<ModelSelection> {
        match mode {
            SelectionMode::Auto => self.select_auto(prompt, analysis),
            SelectionMode::Manual(model_id) => self.select_manual(prompt, model_id.as_deref()),
        }
    }

    /// Select automatically, or use `manual_model_id` when given
    ///
    /// # Errors
    /// Returns [`crate::Error::ModelNotFound`] for an unknown manual id.
    pub fn select_model(
        &self,
        prompt: &str,
        analysis: &PromptAnalysis,
        manual_model_id: Option<&str>,
    ) -> Result<ModelSelection> {
        match manual_model_id {
            Some(id) => self.select_manual(prompt, Some(id)),
            None => self.select_auto(prompt, analysis),
        }
    }

    /// Run the automatic pipeline and record the choice in the history
    ///
    /// # Errors
    /// Only fails if the decision tree yields an id the catalog lacks, which
    /// construction rules out.
    pub fn select_auto(&self, prompt: &str, analysis: &PromptAnalysis) -> Result<ModelSelection> {
        let tokens = TokenEstimates::for_response_length(prompt, analysis.expected_response_length);

        // Read the streak, decide and record under one lock
        let (model_id, probabilities) = self.history.transact(|state| {
            let probabilities = calculate_win_probabilities(analysis, state);
            let model_id = self.tree.decide(analysis, &probabilities);
            state.record(model_id);
            debug!(
                model = model_id,
                consecutive_uses = state.consecutive_uses,
                "Recorded automatic selection"
            );
            (model_id, probabilities)
        });

        let model = self.catalog.require(model_id)?;
        let estimated_cost = tokens.cost_on(model);
        let confidence = confidence_score(model, analysis);
        let alternatives = self.rank_alternatives(model, &probabilities);
        let reasoning =
            automatic_reasoning(model, analysis, &tokens, estimated_cost, &probabilities);

        info!(
            model = %model.id,
            task_type = %analysis.task_type,
            complexity = analysis.complexity,
            confidence,
            estimated_cost,
            "Selected model"
        );

        Ok(ModelSelection {
            selected_model: model.clone(),
            estimated_cost,
            confidence_score: confidence,
            alternatives,
            reasoning,
            token_estimates: tokens,
            manual: false,
            win_probabilities: Some(probabilities),
            scoring_details: Some(score_model(model, analysis)),
        })
    }

    /// Use a caller-chosen model, or the catalog's first entry
    ///
    /// Bypasses the decision tree and leaves the usage history untouched.
    ///
    /// # Errors
    /// Returns [`crate::Error::ModelNotFound`] for an unknown id.
    pub fn select_manual(&self, prompt: &str, model_id: Option<&str>) -> Result<ModelSelection> {
        let model = match model_id {
            Some(id) => self.catalog.require(id)?,
            None => self.catalog.first(),
        };
        let tokens = TokenEstimates::for_prompt(prompt, MANUAL_OUTPUT_MULTIPLIER);
        let estimated_cost = tokens.cost_on(model);

        info!(model = %model.id, estimated_cost, "Using manually selected model");

        Ok(ModelSelection {
            selected_model: model.clone(),
            estimated_cost,
            confidence_score: MANUAL_CONFIDENCE,
            alternatives: Vec::new(),
            reasoning: manual_reasoning(model, &tokens, estimated_cost),
            token_estimates: tokens,
            manual: true,
            win_probabilities: None,
            scoring_details: None,
        })
    }

    fn rank_alternatives(
        &self,
        selected: &ModelDescriptor,
        probabilities: &WinProbabilities,
    ) -> Vec<ModelDescriptor> {
        let mut candidates: Vec<&ModelDescriptor> = self
            .catalog
            .models()
            .iter()
            .filter(|m| m.id != selected.id)
            .collect();
        // sort_by is stable: equal weights keep catalog order
        candidates.sort_by(|a, b| {
            let weight_a = probabilities.for_class(model_class(a));
            let weight_b = probabilities.for_class(model_class(b));
            weight_b.total_cmp(&weight_a)
        });
        candidates
            .into_iter()
            .take(MAX_ALTERNATIVES)
            .cloned()
            .collect()
    }
}
