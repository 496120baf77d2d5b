//! Tests for analyzer module

use super::*;

#[test]
fn test_factual_question() {
    let analysis = analyze_prompt("What is the capital of France?");

    assert_eq!(analysis.task_type, TaskType::General);
    assert_eq!(analysis.domain, Domain::General);
    assert_eq!(analysis.complexity, 1);
    assert_eq!(analysis.expertise_required, 2);
    assert_eq!(analysis.accuracy_requirement, 8);
    assert_eq!(analysis.expected_response_length, ResponseLength::Short);
    assert_eq!(analysis.time_sensitivity, TimeSensitivity::Medium);
}

#[test]
fn test_coding_request() {
    let analysis = analyze_prompt("Write a JavaScript function to reverse a string");

    // "function" wins over the "write" creative rule
    assert_eq!(analysis.task_type, TaskType::Coding);
    assert_eq!(analysis.domain, Domain::Coding);
    // floor 7, +2 for the coding domain
    assert_eq!(analysis.complexity, 9);
    assert_eq!(analysis.expertise_required, 10);
    assert_eq!(analysis.accuracy_requirement, 9);
}

#[test]
fn test_creative_request() {
    let analysis = analyze_prompt("Write a short poem about the ocean");

    assert_eq!(analysis.task_type, TaskType::Creative);
    assert_eq!(analysis.domain, Domain::Creative);
    assert_eq!(analysis.complexity, 2);
    assert_eq!(analysis.expertise_required, 5);
    assert_eq!(analysis.accuracy_requirement, 6);
}

#[test]
fn test_reasoning_request() {
    let analysis = analyze_prompt("Why do leaves change color in autumn?");

    assert_eq!(analysis.task_type, TaskType::Reasoning);
    assert_eq!(analysis.domain, Domain::General);
    assert_eq!(analysis.complexity, 6);
    assert_eq!(analysis.expertise_required, 7);
    assert_eq!(analysis.accuracy_requirement, 6);
}

#[test]
fn test_reasoning_with_analysis_verbs() {
    let analysis = analyze_prompt("Why should we analyze and compare these two approaches?");

    assert_eq!(analysis.task_type, TaskType::Reasoning);
    // floor 6, +2 analyze, +1 compare, +2 for the two complexity verbs
    assert_eq!(analysis.complexity, 10);
    assert_eq!(analysis.expertise_required, 10);
    assert_eq!(analysis.accuracy_requirement, 8);
}

#[test]
fn test_no_keywords_is_mixed() {
    let analysis = analyze_prompt("Tell me a joke");

    assert_eq!(analysis.task_type, TaskType::Mixed);
    assert_eq!(analysis.domain, Domain::General);
    assert_eq!(analysis.complexity, 1);
    assert_eq!(analysis.accuracy_requirement, 6);
}

#[test]
fn test_override_order_coding_before_general() {
    // both "what" and "code" present: coding rule is checked first
    let analysis = analyze_prompt("what does this code do");
    assert_eq!(analysis.task_type, TaskType::Coding);
}

#[test]
fn test_override_general_before_reasoning() {
    let analysis = analyze_prompt("who explained how gravity works");
    assert_eq!(analysis.task_type, TaskType::General);
}

#[test]
fn test_general_explain_raises_complexity() {
    let analysis = analyze_prompt("What is photosynthesis? Please explain it.");

    assert_eq!(analysis.task_type, TaskType::General);
    // min(1 + 2, 6)
    assert_eq!(analysis.complexity, 3);
}

#[test]
fn test_degenerate_inputs() {
    for prompt in ["", "   ", "\n\t\n", "!!!???"] {
        let analysis = analyze_prompt(prompt);
        assert_eq!(analysis.complexity, 1, "prompt {prompt:?}");
        assert_eq!(analysis.domain, Domain::General);
        assert_eq!(analysis.task_type, TaskType::Mixed);
        assert_eq!(analysis.expected_response_length, ResponseLength::Short);
    }
}

#[test]
fn test_scores_always_in_range() {
    let long_prompt = "analyze evaluate compare synthesize optimize design implement \
                       architect debug solve the algorithm for this class interface code "
        .repeat(20);
    let prompts = [
        "",
        "hi",
        long_prompt.as_str(),
        "Explain quantum physics experiments and the chemistry of biology in exact detail",
        "URGENT: quickly solve this calculus equation",
    ];

    for prompt in prompts {
        let analysis = analyze_prompt(prompt);
        for score in [
            analysis.complexity,
            analysis.expertise_required,
            analysis.accuracy_requirement,
        ] {
            assert!((1..=10).contains(&score), "{score} out of range");
        }
    }
}

#[test]
fn test_domain_tie_keeps_first() {
    // one coding keyword ("python") and one business keyword ("startup")
    let analysis = analyze_prompt("python for my startup");
    assert_eq!(analysis.domain, Domain::Coding);
}

#[test]
fn test_response_length_buckets() {
    assert_eq!(ResponseLength::from_word_count(0), ResponseLength::Short);
    assert_eq!(ResponseLength::from_word_count(9), ResponseLength::Short);
    assert_eq!(ResponseLength::from_word_count(10), ResponseLength::Medium);
    assert_eq!(ResponseLength::from_word_count(30), ResponseLength::Medium);
    assert_eq!(ResponseLength::from_word_count(31), ResponseLength::Long);

    assert_eq!(ResponseLength::Short.output_multiplier(), 2);
    assert_eq!(ResponseLength::Medium.output_multiplier(), 5);
    assert_eq!(ResponseLength::Long.output_multiplier(), 10);
}

#[test]
fn test_time_sensitivity() {
    assert_eq!(
        analyze_prompt("I need this urgently").time_sensitivity,
        TimeSensitivity::High
    );
    assert_eq!(
        analyze_prompt("Summarize this when you have time").time_sensitivity,
        TimeSensitivity::Low
    );
    assert_eq!(
        analyze_prompt("Summarize this").time_sensitivity,
        TimeSensitivity::Medium
    );
}

#[test]
fn test_accuracy_keywords_use_max_not_sum() {
    let analysis = analyze_prompt("give me a precise and accurate critical summary");
    assert_eq!(analysis.accuracy_requirement, 8);
}

#[test]
fn test_analysis_is_deterministic() {
    let prompt = "Compare Rust and Go for building a web server";
    assert_eq!(analyze_prompt(prompt), analyze_prompt(prompt));
}
