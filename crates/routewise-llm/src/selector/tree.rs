//! Decision tree mapping an analysis to one catalog model
//!
//! The tree is data: a [`DecisionNode`] is either a leaf holding a model id
//! or a branch with a [`Predicate`]. It is validated against the catalog
//! once at construction, so traversal never meets an unknown id.

use super::types::WinProbabilities;
use crate::analyzer::{PromptAnalysis, TaskType};
use crate::catalog::{
    Catalog, CLAUDE_3_HAIKU, CLAUDE_3_OPUS, CLAUDE_3_SONNET, DEEPSEEK_R1, MISTRAL_MEDIUM,
};
use crate::error::{Error, Result};

/// Condition evaluated at a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Task type equals
    TaskTypeIs(TaskType),
    /// Task type is one of
    TaskTypeIn(Vec<TaskType>),
    /// `complexity <= n`
    ComplexityAtMost(u8),
    /// `complexity >= n`
    ComplexityAtLeast(u8),
    /// `accuracy_requirement >= n`
    AccuracyAtLeast(u8),
    /// Any inner predicate holds
    AnyOf(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate against an analysis
    ///
    /// Win probabilities are part of the signature but no predicate reads
    /// them: branching depends on the analysis alone.
    // TODO: add probability-threshold predicates once the class weights are
    // calibrated against real outcomes.
    #[must_use]
    pub fn evaluate(&self, analysis: &PromptAnalysis, probabilities: &WinProbabilities) -> bool {
        match self {
            Self::TaskTypeIs(task_type) => analysis.task_type == *task_type,
            Self::TaskTypeIn(task_types) => task_types.contains(&analysis.task_type),
            Self::ComplexityAtMost(n) => analysis.complexity <= *n,
            Self::ComplexityAtLeast(n) => analysis.complexity >= *n,
            Self::AccuracyAtLeast(n) => analysis.accuracy_requirement >= *n,
            Self::AnyOf(predicates) => predicates
                .iter()
                .any(|p| p.evaluate(analysis, probabilities)),
        }
    }
}

/// Node of the decision tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionNode {
    /// Select this model id
    Leaf(String),
    /// Follow `if_true` when the predicate holds, else `if_false`
    Branch {
        /// Condition
        predicate: Predicate,
        /// Subtree when the condition holds
        if_true: Box<DecisionNode>,
        /// Subtree otherwise
        if_false: Box<DecisionNode>,
    },
}

impl DecisionNode {
    /// Leaf selecting `model_id`
    #[must_use]
    pub fn leaf(model_id: &str) -> Self {
        Self::Leaf(model_id.to_string())
    }

    /// Branch node
    #[must_use]
    pub fn branch(predicate: Predicate, if_true: DecisionNode, if_false: DecisionNode) -> Self {
        Self::Branch {
            predicate,
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    fn leaf_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Leaf(id) => out.push(id.as_str()),
            Self::Branch {
                if_true, if_false, ..
            } => {
                if_true.leaf_ids(out);
                if_false.leaf_ids(out);
            }
        }
    }
}

/// Validated decision tree
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: DecisionNode,
}

impl DecisionTree {
    /// Validate every leaf against `catalog`
    ///
    /// # Errors
    /// Returns [`Error::InvalidCatalog`] naming the first leaf whose model id
    /// is missing from the catalog.
    pub fn new(root: DecisionNode, catalog: &Catalog) -> Result<Self> {
        let mut ids = Vec::new();
        root.leaf_ids(&mut ids);
        if let Some(missing) = ids.iter().find(|id| catalog.get(id).is_none()) {
            return Err(Error::InvalidCatalog(format!(
                "decision tree references unknown model: {missing}"
            )));
        }
        Ok(Self { root })
    }

    /// The shipped routing tree, validated against `catalog`
    ///
    /// # Errors
    /// Fails when `catalog` lacks one of the tree's models.
    pub fn standard(catalog: &Catalog) -> Result<Self> {
        Self::new(standard_tree(), catalog)
    }

    /// Walk the tree and return the selected model id
    #[must_use]
    pub fn decide(&self, analysis: &PromptAnalysis, probabilities: &WinProbabilities) -> &str {
        let mut node = &self.root;
        loop {
            match node {
                DecisionNode::Leaf(id) => return id.as_str(),
                DecisionNode::Branch {
                    predicate,
                    if_true,
                    if_false,
                } => {
                    node = if predicate.evaluate(analysis, probabilities) {
                        &**if_true
                    } else {
                        &**if_false
                    };
                }
            }
        }
    }

    /// Root node
    #[must_use]
    pub fn root(&self) -> &DecisionNode {
        &self.root
    }
}

fn standard_tree() -> DecisionNode {
    use DecisionNode as N;
    use Predicate as P;

    let general = N::branch(
        P::ComplexityAtMost(5),
        N::leaf(DEEPSEEK_R1),
        N::branch(
            P::AccuracyAtLeast(8),
            N::leaf(CLAUDE_3_OPUS),
            N::leaf(DEEPSEEK_R1),
        ),
    );

    let demanding = N::branch(
        P::TaskTypeIn(vec![TaskType::Coding, TaskType::Reasoning]),
        N::leaf(CLAUDE_3_OPUS),
        N::leaf(CLAUDE_3_SONNET),
    );

    let routine = N::branch(
        P::TaskTypeIs(TaskType::Creative),
        N::leaf(CLAUDE_3_SONNET),
        N::branch(
            P::ComplexityAtMost(3),
            N::leaf(CLAUDE_3_HAIKU),
            N::leaf(MISTRAL_MEDIUM),
        ),
    );

    N::branch(
        P::TaskTypeIs(TaskType::General),
        general,
        N::branch(
            P::AnyOf(vec![P::ComplexityAtLeast(8), P::AccuracyAtLeast(8)]),
            demanding,
            routine,
        ),
    )
}
