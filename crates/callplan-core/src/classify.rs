//! Query classification
//!
//! Derives the intent label and complexity tier from raw query text. Both
//! functions are pure; the rule tables are literal data so a learned
//! classifier can replace them without touching orchestration.

use crate::types::Complexity;

/// Keywords that push a query into the complex tier regardless of length
const COMPLEX_KEYWORDS: &[&str] = &[
    "analyze",
    "generate",
    "process",
    "integrate",
    "workflow",
    "multiple",
    "all",
];

/// Ordered (intent label, trigger keywords) pairs; first match wins
const INTENT_RULES: &[(&str, &[&str])] = &[
    ("Data Retrieval", &["get", "fetch", "retrieve", "find", "search", "show"]),
    ("Data Processing", &["calculate", "process", "analyze", "filter", "sort", "aggregate"]),
    ("Communication", &["send", "email", "notify", "message", "alert"]),
    ("Reporting", &["report", "generate", "export", "create", "summary"]),
    ("Workflow Automation", &["automate", "workflow", "schedule", "batch", "bulk"]),
    ("Security", &["authenticate", "validate", "secure", "encrypt", "audit"]),
];

/// Intent label when no rule matches
pub const FALLBACK_INTENT: &str = "General Query Processing";

/// Classify query complexity from word count and complex keywords
///
/// Rules, in order: at most 5 words without a complex keyword is simple,
/// at most 12 words without a complex keyword is medium, everything else
/// is complex.
#[must_use]
pub fn determine_complexity(query: &str) -> Complexity {
    let word_count = query.split_whitespace().count();
    let lower = query.to_lowercase();
    let has_complex_keyword = COMPLEX_KEYWORDS.iter().any(|kw| lower.contains(kw));

    if word_count <= 5 && !has_complex_keyword {
        Complexity::Simple
    } else if word_count <= 12 && !has_complex_keyword {
        Complexity::Medium
    } else {
        Complexity::Complex
    }
}

/// Derive the intent label for a query
///
/// Returns the label of the first rule whose keyword set has a lowercase
/// substring match, or [`FALLBACK_INTENT`] when none match.
#[must_use]
pub fn determine_intent(query: &str) -> &'static str {
    let lower = query.to_lowercase();
    for (intent, keywords) in INTENT_RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return intent;
        }
    }
    FALLBACK_INTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_query_is_simple() {
        assert_eq!(determine_complexity("send an email"), Complexity::Simple);
        assert_eq!(determine_complexity("one two three four five"), Complexity::Simple);
    }

    #[test]
    fn medium_query_by_word_count() {
        assert_eq!(
            determine_complexity("one two three four five six"),
            Complexity::Medium
        );
        assert_eq!(
            determine_complexity("a b c d e f g h i j k l"),
            Complexity::Medium
        );
    }

    #[test]
    fn long_query_is_complex() {
        // 14 words, no complex keyword
        assert_eq!(
            determine_complexity("a b c d e f g h i j k l m n"),
            Complexity::Complex
        );
    }

    #[test]
    fn complex_keyword_overrides_word_count() {
        assert_eq!(determine_complexity("analyze this"), Complexity::Complex);
        // "all" matches as a substring inside short queries too
        assert_eq!(determine_complexity("show all"), Complexity::Complex);
    }

    #[test]
    fn intent_first_match_wins() {
        // "get" (Data Retrieval) outranks "email" (Communication)
        assert_eq!(determine_intent("get the email thread"), "Data Retrieval");
        assert_eq!(determine_intent("send an email"), "Communication");
        assert_eq!(determine_intent("authenticate the user"), "Security");
    }

    #[test]
    fn intent_fallback() {
        assert_eq!(determine_intent("xyz"), FALLBACK_INTENT);
    }

    #[test]
    fn classification_is_idempotent() {
        let query = "generate a report for all customers";
        assert_eq!(determine_complexity(query), determine_complexity(query));
        assert_eq!(determine_intent(query), determine_intent(query));
    }
}
