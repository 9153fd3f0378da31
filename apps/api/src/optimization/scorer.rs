#![allow(dead_code)]

//! Resume scorer: the pluggable entry point for resume optimization reports.
//!
//! Scoring is pure and synchronous: same snapshot in, same report out, no I/O.
//! `AppState` holds an `Arc<dyn ResumeScorer>`; `PolicyScorer` is the default
//! and carries one pre-built policy per `ScoringMode`.

use once_cell::sync::Lazy;

use crate::models::resume::ResumeRecord;
use crate::optimization::policy::{ScoringMode, ScoringPolicy};
use crate::optimization::report::OptimizationReport;

pub trait ResumeScorer: Send + Sync {
    fn score(&self, resume: &ResumeRecord, mode: ScoringMode) -> OptimizationReport;
}

/// Rule-table scorer backed by the built-in `detailed` and `basic` policies.
pub struct PolicyScorer {
    detailed: ScoringPolicy,
    basic: ScoringPolicy,
}

impl PolicyScorer {
    pub fn new() -> Self {
        Self {
            detailed: ScoringPolicy::detailed(),
            basic: ScoringPolicy::basic(),
        }
    }

    pub fn policy(&self, mode: ScoringMode) -> &ScoringPolicy {
        match mode {
            ScoringMode::Detailed => &self.detailed,
            ScoringMode::Basic => &self.basic,
        }
    }
}

impl Default for PolicyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeScorer for PolicyScorer {
    fn score(&self, resume: &ResumeRecord, mode: ScoringMode) -> OptimizationReport {
        self.policy(mode).evaluate(resume)
    }
}

static DETAILED: Lazy<ScoringPolicy> = Lazy::new(ScoringPolicy::detailed);

/// Scores a resume with the detailed policy.
///
/// Callers should only invoke this once `personalInfo.fullName` is set; an
/// empty resume still scores, it just collects most of the penalties.
pub fn score(resume: &ResumeRecord) -> OptimizationReport {
    DETAILED.evaluate(resume)
}
