//! Core types for prompt analysis

use super::keywords;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Task Type
// ============================================================================

/// Coarse kind of work a prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Factual question or short explanation
    General,
    /// Analysis, comparison, "why" questions
    Reasoning,
    /// Stories, poems, ideation
    Creative,
    /// Writing or fixing code
    Coding,
    /// No keyword matched
    Mixed,
}

impl TaskType {
    /// Task types probed by the keyword-count pass, in priority order
    pub(crate) const KEYWORD_ORDER: [TaskType; 4] = [
        TaskType::General,
        TaskType::Reasoning,
        TaskType::Creative,
        TaskType::Coding,
    ];

    /// Keywords counted for this task type
    #[must_use]
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::General => keywords::GENERAL_TASK,
            Self::Reasoning => keywords::REASONING_TASK,
            Self::Creative => keywords::CREATIVE_TASK,
            Self::Coding => keywords::CODING_TASK,
            Self::Mixed => &[],
        }
    }

    /// Lower-case label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Reasoning => "reasoning",
            Self::Creative => "creative",
            Self::Coding => "coding",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Domain
// ============================================================================

/// Subject area detected from keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Programming
    Coding,
    /// Natural sciences
    Science,
    /// Mathematics
    Math,
    /// Creative writing and art
    Creative,
    /// Business and finance
    Business,
    /// Anything else
    General,
}

impl Domain {
    /// Iteration order for detection; earlier domains win ties
    pub(crate) const ALL: [Domain; 6] = [
        Domain::Coding,
        Domain::Science,
        Domain::Math,
        Domain::Creative,
        Domain::Business,
        Domain::General,
    ];

    /// Keywords counted for this domain
    #[must_use]
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Coding => keywords::CODING_DOMAIN,
            Self::Science => keywords::SCIENCE_DOMAIN,
            Self::Math => keywords::MATH_DOMAIN,
            Self::Creative => keywords::CREATIVE_DOMAIN,
            Self::Business => keywords::BUSINESS_DOMAIN,
            Self::General => keywords::GENERAL_DOMAIN,
        }
    }

    /// Coding, science and math prompts demand more precision
    #[must_use]
    pub fn is_technical(&self) -> bool {
        matches!(self, Self::Coding | Self::Science | Self::Math)
    }

    /// Lower-case label, also matched against model specializations
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Science => "science",
            Self::Math => "math",
            Self::Creative => "creative",
            Self::Business => "business",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Response length / time sensitivity
// ============================================================================

/// Expected size of the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseLength {
    /// Fewer than 10 prompt words
    Short,
    /// 10 to 30 prompt words
    Medium,
    /// More than 30 prompt words
    Long,
}

impl ResponseLength {
    /// Bucket a prompt by its word count
    #[must_use]
    pub fn from_word_count(word_count: usize) -> Self {
        if word_count < 10 {
            Self::Short
        } else if word_count > 30 {
            Self::Long
        } else {
            Self::Medium
        }
    }

    /// Output tokens per input token
    #[must_use]
    pub fn output_multiplier(&self) -> u32 {
        match self {
            Self::Short => 2,
            Self::Medium => 5,
            Self::Long => 10,
        }
    }
}

/// How urgently the user wants an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSensitivity {
    /// "when you have time"
    Low,
    /// Default
    Medium,
    /// "urgent" / "quickly"
    High,
}

// ============================================================================
// Prompt Analysis
// ============================================================================

/// Structured characteristics of one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    /// Overall difficulty, `1..=10`
    pub complexity: u8,
    /// Domain expertise needed, `1..=10`
    pub expertise_required: u8,
    /// Expected answer size
    pub expected_response_length: ResponseLength,
    /// Urgency
    pub time_sensitivity: TimeSensitivity,
    /// How costly a wrong answer is, `1..=10`
    pub accuracy_requirement: u8,
    /// Detected subject area
    pub domain: Domain,
    /// Detected kind of work
    pub task_type: TaskType,
}
