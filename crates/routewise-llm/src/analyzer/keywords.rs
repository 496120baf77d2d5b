//! Keyword tables used by the analyzer
//!
//! All matching is plain substring search on the lower-cased prompt, so
//! "what is" also matches inside "somewhat isolated".

// Domains
pub(crate) const CODING_DOMAIN: &[&str] = &[
    "code",
    "function",
    "programming",
    "javascript",
    "python",
    "algorithm",
    "debug",
];
pub(crate) const SCIENCE_DOMAIN: &[&str] = &[
    "science",
    "physics",
    "chemistry",
    "biology",
    "scientific",
    "experiment",
];
pub(crate) const MATH_DOMAIN: &[&str] = &[
    "math",
    "equation",
    "calculation",
    "formula",
    "solve",
    "calculus",
    "algebra",
];
pub(crate) const CREATIVE_DOMAIN: &[&str] = &[
    "story", "creative", "imagine", "design", "art", "write", "poem", "fiction",
];
pub(crate) const BUSINESS_DOMAIN: &[&str] = &[
    "business",
    "marketing",
    "finance",
    "strategy",
    "company",
    "startup",
    "market",
];
pub(crate) const GENERAL_DOMAIN: &[&str] =
    &["explain", "what is", "how to", "why", "when", "where", "who"];

// Task types (coarse pass)
pub(crate) const GENERAL_TASK: &[&str] = &[
    "what is", "define", "explain", "describe", "list", "when did", "who is",
];
pub(crate) const REASONING_TASK: &[&str] = &[
    "why", "analyze", "compare", "evaluate", "how would", "what if", "reason",
];
pub(crate) const CREATIVE_TASK: &[&str] = &[
    "create", "design", "write", "imagine", "generate", "story", "poem",
];
pub(crate) const CODING_TASK: &[&str] = &[
    "code", "function", "program", "implement", "debug", "fix", "optimize",
];

// Task types (override rules, checked in this order)
pub(crate) const CODING_OVERRIDE: &[&str] = &["code", "function", "program"];
pub(crate) const CREATIVE_OVERRIDE_SUBJECT: &[&str] = &["story", "poem"];
pub(crate) const GENERAL_OVERRIDE: &[&str] = &["what", "who", "when"];
pub(crate) const REASONING_OVERRIDE: &[&str] = &["why", "how", "explain"];

// Complexity
pub(crate) const COMPLEXITY_VERBS: &[&str] = &[
    "analyze",
    "evaluate",
    "compare",
    "synthesize",
    "optimize",
    "design",
    "implement",
    "architect",
    "debug",
    "solve",
];

// Accuracy
pub(crate) const ACCURACY_TERMS: &[&str] =
    &["accurate", "precise", "exact", "critical", "important"];

// Time sensitivity
pub(crate) const URGENT_TERMS: &[&str] = &["urgent", "quickly"];
pub(crate) const RELAXED_PHRASE: &str = "when you have time";

/// Number of `keywords` occurring in `text`
pub(crate) fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

/// Whether any of `keywords` occurs in `text`
pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
