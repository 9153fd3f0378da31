use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high = 0, medium = 1, low = 2.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// What a suggestion is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Ats,
    Keywords,
    Content,
    Formatting,
    Structure,
    Impact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub section: String,
    pub message: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionable: Option<String>,
}

/// Score band shown next to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            Rating::Excellent
        } else if score >= 70 {
            Rating::Good
        } else {
            Rating::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub score: u32,
    /// Sorted by priority, high first; equal priorities keep evaluation order.
    pub suggestions: Vec<Suggestion>,
    /// Name of the scoring policy that produced this report.
    pub policy: String,
    pub rating: Rating,
    pub headline: String,
}

/// Stable sort by priority rank. `sort_by_key` is stable, so suggestions of
/// equal priority stay in the order their checks ran.
pub fn sort_by_priority(suggestions: &mut [Suggestion]) {
    suggestions.sort_by_key(|s| s.priority.rank());
}
