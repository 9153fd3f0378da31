//! Vocabularies and text signals the scoring rules look for.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Impact verbs that read as ownership and results.
pub const POWER_WORDS: &[&str] = &[
    "spearheaded",
    "orchestrated",
    "accelerated",
    "streamlined",
    "transformed",
    "optimized",
    "pioneered",
    "revolutionized",
    "established",
    "delivered",
    "collaborated",
    "architected",
];

/// Technical terms ATS filters commonly match on. Matched as plain substrings,
/// so short entries like "go" and "ai" also hit inside longer words.
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "agile",
    "scrum",
    "devops",
    "cloud",
    "api",
    "microservices",
    "ci/cd",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "sql",
    "nosql",
    "react",
    "angular",
    "vue",
    "node",
    "python",
    "java",
    "c#",
    "go",
    "rust",
    "machine learning",
    "ai",
    "data analysis",
    "analytics",
];

/// General-purpose resume keywords used by the basic policy.
pub const COMMON_KEYWORDS: &[&str] = &[
    "leadership",
    "management",
    "project",
    "team",
    "development",
    "analysis",
    "strategy",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "managed",
    "led",
    "developed",
    "implemented",
    "improved",
    "increased",
];

/// Percentages, dollar amounts, multipliers and "N things".
static METRICS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+%|\$[0-9]+[KMB]?|[0-9]+x|[0-9]+ [A-Za-z0-9_]+)")
        .expect("metrics pattern is a valid regex")
});

/// Number of non-overlapping quantified metrics in `text`.
pub fn count_metrics(text: &str) -> usize {
    METRICS_RE.find_iter(text).count()
}

pub fn has_metrics(text: &str) -> bool {
    METRICS_RE.is_match(text)
}

/// Case-insensitive check for any of `words` as a substring of `text`.
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    let lower = text.to_lowercase();
    words.iter().any(|w| lower.contains(w))
}

/// How many distinct vocabulary terms occur in already-lowercased `text`.
pub fn count_vocabulary_hits(lower_text: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|term| lower_text.contains(*term)).count()
}

/// Year component of a "YYYY-MM-DD", "YYYY-MM" or "YYYY" date.
/// Returns `None` for empty or malformed input.
pub fn parse_year(value: &str) -> Option<i32> {
    let value = value.trim();
    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01-01"), "%Y-%m-%d"))
        .ok()
        .map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_metric_shape() {
        assert_eq!(count_metrics("Increased sales by 45%"), 1);
        assert_eq!(count_metrics("Reduced costs by $200K"), 1);
        assert_eq!(count_metrics("Improved efficiency by 3x"), 1);
        assert_eq!(count_metrics("Managed team of 12 engineers"), 1);
    }

    #[test]
    fn test_metrics_are_case_insensitive() {
        assert_eq!(count_metrics("Made it 3X faster"), 1);
        assert_eq!(count_metrics("Raised $5m"), 1);
    }

    #[test]
    fn test_multiple_metrics_in_one_description() {
        let text = "Cut latency 40% and saved $30K while mentoring 4 juniors";
        assert_eq!(count_metrics(text), 3);
    }

    #[test]
    fn test_no_metrics_in_plain_prose() {
        assert_eq!(count_metrics("Worked on backend services"), 0);
        assert!(!has_metrics("Built the onboarding flow"));
        assert!(has_metrics("Served 50 users"));
    }

    #[test]
    fn test_contains_any_ignores_case() {
        assert!(contains_any("SPEARHEADED a migration", POWER_WORDS));
        assert!(!contains_any("did a migration", POWER_WORDS));
    }

    #[test]
    fn test_vocabulary_hits_count_terms_once() {
        let text = "python python python and rust";
        assert_eq!(count_vocabulary_hits(text, &["python", "rust", "java"]), 2);
    }

    #[test]
    fn test_vocabulary_matches_inside_words() {
        // "google" contains "go"; "email" contains "ai"
        let text = "google email";
        assert_eq!(count_vocabulary_hits(text, &["go", "ai"]), 2);
    }

    #[test]
    fn test_parse_year_accepts_month_and_day_forms() {
        assert_eq!(parse_year("2023-01"), Some(2023));
        assert_eq!(parse_year("2019-12-31"), Some(2019));
        assert_eq!(parse_year("2020"), Some(2020));
    }

    #[test]
    fn test_parse_year_rejects_garbage() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("present"), None);
        assert_eq!(parse_year("2023-13"), None);
        assert_eq!(parse_year("-01"), None);
    }
}
