//! Rule-based prompt classification

use super::keywords::{self, contains_any, count_matches};
use super::types::{Domain, PromptAnalysis, ResponseLength, TaskType, TimeSensitivity};
use tracing::debug;

const MIN_SCORE: u32 = 1;
const MAX_SCORE: u32 = 10;

/// Classify a prompt
///
/// Total over all inputs: empty or whitespace-only prompts yield a valid
/// low-information analysis (complexity 1, domain general, task type mixed).
#[must_use]
pub fn analyze_prompt(prompt: &str) -> PromptAnalysis {
    let lower = prompt.to_lowercase();
    let word_count = prompt.split_whitespace().count();

    let domain = detect_domain(&lower);
    let task_type = detect_task_type(&lower);
    let complexity = score_complexity(&lower, word_count, task_type, domain);

    let analysis = PromptAnalysis {
        complexity,
        expertise_required: score_expertise(complexity, task_type, domain),
        expected_response_length: ResponseLength::from_word_count(word_count),
        time_sensitivity: detect_time_sensitivity(&lower),
        accuracy_requirement: score_accuracy(&lower, complexity, task_type, domain),
        domain,
        task_type,
    };

    debug!(
        word_count,
        domain = %analysis.domain,
        task_type = %analysis.task_type,
        complexity = analysis.complexity,
        expertise = analysis.expertise_required,
        accuracy = analysis.accuracy_requirement,
        "Analyzed prompt"
    );

    analysis
}

/// Domain with the strictly highest keyword count; ties keep the earlier one
fn detect_domain(lower: &str) -> Domain {
    let mut domain = Domain::General;
    let mut best = 0;
    for candidate in Domain::ALL {
        let matches = count_matches(lower, candidate.keywords());
        if matches > best {
            best = matches;
            domain = candidate;
        }
    }
    domain
}

fn detect_task_type(lower: &str) -> TaskType {
    let mut task_type = TaskType::Mixed;
    let mut best = 0;
    for candidate in TaskType::KEYWORD_ORDER {
        let matches = count_matches(lower, candidate.keywords());
        if matches > best {
            best = matches;
            task_type = candidate;
        }
    }

    task_type_override(lower).unwrap_or(task_type)
}

/// Higher-priority rules; the first one that fires wins
fn task_type_override(lower: &str) -> Option<TaskType> {
    if contains_any(lower, keywords::CODING_OVERRIDE) {
        Some(TaskType::Coding)
    } else if lower.contains("write") && contains_any(lower, keywords::CREATIVE_OVERRIDE_SUBJECT)
    {
        Some(TaskType::Creative)
    } else if contains_any(lower, keywords::GENERAL_OVERRIDE) {
        Some(TaskType::General)
    } else if contains_any(lower, keywords::REASONING_OVERRIDE) {
        Some(TaskType::Reasoning)
    } else {
        None
    }
}

fn score_complexity(lower: &str, word_count: usize, task_type: TaskType, domain: Domain) -> u8 {
    let mut complexity = (word_count / 12).clamp(1, 10) as u32;

    match task_type {
        TaskType::Coding => {
            complexity = complexity.max(7);
            if contains_any(lower, &["algorithm", "optimize"]) {
                complexity += 2;
            }
            if contains_any(lower, &["class", "interface"]) {
                complexity += 1;
            }
        }
        TaskType::Reasoning => {
            complexity = complexity.max(6);
            if contains_any(lower, &["analyze", "evaluate"]) {
                complexity += 2;
            }
            if contains_any(lower, &["compare", "contrast"]) {
                complexity += 1;
            }
        }
        TaskType::Creative => {
            if contains_any(lower, &["story", "poem"]) {
                complexity += 1;
            }
            if contains_any(lower, &["novel", "innovative"]) {
                complexity += 2;
            }
        }
        TaskType::General => {
            complexity = complexity.min(4);
            if contains_any(lower, &["explain", "describe"]) {
                complexity = (complexity + 2).min(6);
            }
        }
        TaskType::Mixed => {}
    }

    if domain.is_technical() {
        complexity += 2;
    }

    complexity += count_matches(lower, keywords::COMPLEXITY_VERBS) as u32;

    clamp_score(complexity)
}

fn score_expertise(complexity: u8, task_type: TaskType, domain: Domain) -> u8 {
    let complexity = u32::from(complexity);
    let mut expertise = if domain == Domain::General {
        complexity + 1
    } else {
        complexity + 3
    };

    if task_type == TaskType::Coding {
        expertise = expertise.max(7);
    }
    if task_type == TaskType::Reasoning && complexity >= 7 {
        expertise = expertise.max(8);
    }

    clamp_score(expertise)
}

fn detect_time_sensitivity(lower: &str) -> TimeSensitivity {
    if contains_any(lower, keywords::URGENT_TERMS) {
        TimeSensitivity::High
    } else if lower.contains(keywords::RELAXED_PHRASE) {
        TimeSensitivity::Low
    } else {
        TimeSensitivity::Medium
    }
}

/// Floors combine via max, never by addition
fn score_accuracy(lower: &str, complexity: u8, task_type: TaskType, domain: Domain) -> u8 {
    let mut accuracy = 6;

    if domain.is_technical() {
        accuracy = 9;
    }
    if task_type == TaskType::General || (task_type == TaskType::Reasoning && complexity >= 7) {
        accuracy = accuracy.max(8);
    }
    if contains_any(lower, keywords::ACCURACY_TERMS) {
        accuracy = accuracy.max(8);
    }

    accuracy
}

fn clamp_score(value: u32) -> u8 {
    value.clamp(MIN_SCORE, MAX_SCORE) as u8
}
