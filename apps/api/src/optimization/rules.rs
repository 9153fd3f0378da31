//! Individual resume checks. Each rule inspects a resume snapshot and reports
//! zero or more findings; a policy decides which rules run and in what order.

use crate::models::resume::ResumeRecord;
use crate::optimization::report::{Priority, Suggestion, SuggestionKind};
use crate::optimization::signals::{
    contains_any, count_metrics, count_vocabulary_hits, has_metrics, parse_year,
};

/// A failed check: the suggestion shown to the user and the points it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub suggestion: Suggestion,
    pub penalty: u32,
}

/// Text, priority and penalty attached to a rule when it fires.
///
/// `message` may contain `{placeholder}` markers that the rule fills in.
#[derive(Debug, Clone)]
pub struct Remedy {
    pub kind: SuggestionKind,
    pub section: &'static str,
    pub message: &'static str,
    pub priority: Priority,
    pub actionable: Option<&'static str>,
    pub penalty: u32,
}

impl Remedy {
    fn finding(&self) -> Finding {
        self.finding_with_message(self.message.to_string())
    }

    fn finding_with_message(&self, message: String) -> Finding {
        Finding {
            suggestion: Suggestion {
                kind: self.kind,
                section: self.section.to_string(),
                message,
                priority: self.priority,
                actionable: self.actionable.map(str::to_string),
            },
            penalty: self.penalty,
        }
    }
}

/// A single check over a resume. Rules are independent of one another.
pub trait Rule: Send + Sync {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding>;
}

fn fire_if(condition: bool, remedy: &Remedy) -> Vec<Finding> {
    if condition {
        vec![remedy.finding()]
    } else {
        vec![]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact and summary
// ────────────────────────────────────────────────────────────────────────────

/// Fires when the summary is shorter than `min_chars` characters.
pub struct SummaryLengthRule {
    pub min_chars: usize,
    pub remedy: Remedy,
}

impl Rule for SummaryLengthRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let len = resume.personal_info.summary.chars().count();
        fire_if(len < self.min_chars, &self.remedy)
    }
}

pub struct LinkedInRule {
    pub remedy: Remedy,
}

impl Rule for LinkedInRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        fire_if(resume.personal_info.linkedin_url().is_none(), &self.remedy)
    }
}

pub struct EmailFormatRule {
    pub remedy: Remedy,
}

impl Rule for EmailFormatRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        fire_if(!resume.personal_info.email.contains('@'), &self.remedy)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Fires when there is experience but no description uses an impact verb.
pub struct PowerWordRule {
    pub words: &'static [&'static str],
    pub remedy: Remedy,
}

impl Rule for PowerWordRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let has_power_words = resume
            .experience
            .iter()
            .any(|exp| contains_any(&exp.description, self.words));
        fire_if(!resume.experience.is_empty() && !has_power_words, &self.remedy)
    }
}

/// Expects at least one quantified metric per experience entry.
///
/// `missing` fires when there are none at all; `sparse` fires when there are
/// fewer metrics than roles and takes `{count}` and `{target}` placeholders.
pub struct ExperienceMetricsRule {
    pub missing: Remedy,
    pub sparse: Remedy,
}

impl Rule for ExperienceMetricsRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let roles = resume.experience.len();
        let metrics: usize = resume
            .experience
            .iter()
            .map(|exp| count_metrics(&exp.description))
            .sum();

        if metrics == 0 && roles > 0 {
            vec![self.missing.finding()]
        } else if metrics < roles {
            let message = self
                .sparse
                .message
                .replace("{count}", &metrics.to_string())
                .replace("{target}", &roles.to_string());
            vec![self.sparse.finding_with_message(message)]
        } else {
            vec![]
        }
    }
}

/// Counts industry vocabulary across summary, experience and skills.
/// Only applies once the user has listed at least one skill.
/// The message takes a `{count}` placeholder.
pub struct KeywordDensityRule {
    pub vocabulary: &'static [&'static str],
    pub min_hits: usize,
    pub remedy: Remedy,
}

impl Rule for KeywordDensityRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let descriptions: Vec<&str> = resume
            .experience
            .iter()
            .map(|exp| exp.description.as_str())
            .collect();
        let all_text = format!(
            "{} {} {}",
            resume.personal_info.summary,
            descriptions.join(" "),
            resume.skills.join(" ")
        )
        .to_lowercase();

        let hits = count_vocabulary_hits(&all_text, self.vocabulary);
        if hits < self.min_hits && !resume.skills.is_empty() {
            let message = self.remedy.message.replace("{count}", &hits.to_string());
            vec![self.remedy.finding_with_message(message)]
        } else {
            vec![]
        }
    }
}

/// Fires when neither the summary nor any experience description mentions
/// one of `keywords`.
pub struct CommonKeywordRule {
    pub keywords: &'static [&'static str],
    pub remedy: Remedy,
}

impl Rule for CommonKeywordRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let found = contains_any(&resume.personal_info.summary, self.keywords)
            || resume
                .experience
                .iter()
                .any(|exp| contains_any(&exp.description, self.keywords));
        fire_if(!found, &self.remedy)
    }
}

/// Flags employment gaps between consecutive entries, at most once.
///
/// Entries are compared in the order the user added them. The gap is
/// `(year(end of entry i) - year(start of entry i+1)) * 12`; month
/// components are ignored. A pair with an unparseable date never counts.
pub struct EmploymentGapRule {
    pub max_gap_months: i32,
    pub remedy: Remedy,
}

impl EmploymentGapRule {
    fn pair_gap_months(end_date: &str, next_start_date: &str) -> Option<i32> {
        let end_year = parse_year(end_date)?;
        let next_start_year = parse_year(next_start_date)?;
        Some((end_year - next_start_year) * 12)
    }
}

impl Rule for EmploymentGapRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let has_gaps = resume.experience.windows(2).any(|pair| {
            Self::pair_gap_months(&pair[0].end_date, &pair[1].start_date)
                .is_some_and(|gap| gap > self.max_gap_months)
        });
        fire_if(has_gaps, &self.remedy)
    }
}

/// Per-role checks: no experience at all, short descriptions (the message
/// takes a `{position}` placeholder) and descriptions without action verbs.
pub struct ExperienceDetailRule {
    pub missing: Remedy,
    pub min_description_chars: usize,
    pub short_description: Remedy,
    pub action_verbs: &'static [&'static str],
    pub weak_verbs: Remedy,
}

impl Rule for ExperienceDetailRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        if resume.experience.is_empty() {
            return vec![self.missing.finding()];
        }

        let mut findings = Vec::new();
        for exp in &resume.experience {
            if exp.description.chars().count() < self.min_description_chars {
                let message = self
                    .short_description
                    .message
                    .replace("{position}", &exp.position);
                findings.push(self.short_description.finding_with_message(message));
            }
            if !contains_any(&exp.description, self.action_verbs) {
                let message = self.weak_verbs.message.replace("{position}", &exp.position);
                findings.push(self.weak_verbs.finding_with_message(message));
            }
        }
        findings
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects, skills, sections
// ────────────────────────────────────────────────────────────────────────────

/// Fires when there are projects but none of them mention a metric.
pub struct ProjectMetricsRule {
    pub remedy: Remedy,
}

impl Rule for ProjectMetricsRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let with_metrics = resume
            .projects
            .iter()
            .filter(|p| has_metrics(&p.description))
            .count();
        fire_if(!resume.projects.is_empty() && with_metrics == 0, &self.remedy)
    }
}

/// Fires above `max_skills`; the message takes a `{count}` placeholder.
pub struct SkillOrganizationRule {
    pub max_skills: usize,
    pub remedy: Remedy,
}

impl Rule for SkillOrganizationRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let count = resume.skills.len();
        if count > self.max_skills {
            let message = self.remedy.message.replace("{count}", &count.to_string());
            vec![self.remedy.finding_with_message(message)]
        } else {
            vec![]
        }
    }
}

/// Fires below `min_skills`.
pub struct SkillCountRule {
    pub min_skills: usize,
    pub remedy: Remedy,
}

impl Rule for SkillCountRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        fire_if(resume.skills.len() < self.min_skills, &self.remedy)
    }
}

pub struct EnabledSectionsRule {
    pub min_enabled: usize,
    pub remedy: Remedy,
}

impl Rule for EnabledSectionsRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        fire_if(resume.enabled_section_count() < self.min_enabled, &self.remedy)
    }
}

/// Resume collections a presence check can look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Experience,
    Education,
    Projects,
    Certificates,
}

impl Collection {
    fn len(self, resume: &ResumeRecord) -> usize {
        match self {
            Collection::Experience => resume.experience.len(),
            Collection::Education => resume.education.len(),
            Collection::Projects => resume.projects.len(),
            Collection::Certificates => resume.certificates.len(),
        }
    }
}

/// Whether a presence check fires on an empty or on a populated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireWhen {
    Empty,
    Present,
}

pub struct PresenceRule {
    pub collection: Collection,
    pub fire_when: FireWhen,
    pub remedy: Remedy,
}

impl Rule for PresenceRule {
    fn evaluate(&self, resume: &ResumeRecord) -> Vec<Finding> {
        let empty = self.collection.len(resume) == 0;
        let fires = match self.fire_when {
            FireWhen::Empty => empty,
            FireWhen::Present => !empty,
        };
        fire_if(fires, &self.remedy)
    }
}
