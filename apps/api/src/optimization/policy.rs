#![allow(dead_code)]

//! Scoring policies: a baseline score plus an ordered rule table.
//!
//! Two tables ship: `detailed` (recruiter-impact analysis, baseline 85) and
//! `basic` (ATS compatibility, baseline 90). Both run through the same engine
//! in `ScoringPolicy::evaluate`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::ResumeRecord;
use crate::optimization::report::{
    sort_by_priority, OptimizationReport, Priority, Rating, SuggestionKind,
};
use crate::optimization::rules::{
    Collection, CommonKeywordRule, EmailFormatRule, EmploymentGapRule, EnabledSectionsRule,
    ExperienceDetailRule, ExperienceMetricsRule, FireWhen, KeywordDensityRule, LinkedInRule,
    PowerWordRule, PresenceRule, ProjectMetricsRule, Remedy, Rule, SkillCountRule,
    SkillOrganizationRule, SummaryLengthRule,
};
use crate::optimization::signals::{
    ACTION_VERBS, COMMON_KEYWORDS, INDUSTRY_KEYWORDS, POWER_WORDS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    #[default]
    Detailed,
    Basic,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::Detailed => "detailed",
            ScoringMode::Basic => "basic",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "detailed" => Ok(ScoringMode::Detailed),
            "basic" => Ok(ScoringMode::Basic),
            other => Err(format!(
                "unknown scoring mode '{other}' (expected 'detailed' or 'basic')"
            )),
        }
    }
}

/// Verdicts shown under the score for each rating band.
#[derive(Debug, Clone)]
pub struct Headlines {
    pub excellent: &'static str,
    pub good: &'static str,
    pub needs_improvement: &'static str,
}

impl Headlines {
    fn for_rating(&self, rating: Rating) -> &'static str {
        match rating {
            Rating::Excellent => self.excellent,
            Rating::Good => self.good,
            Rating::NeedsImprovement => self.needs_improvement,
        }
    }
}

pub struct ScoringPolicy {
    pub mode: ScoringMode,
    /// Starting score. Rules only subtract, so no report exceeds it.
    pub baseline: u32,
    pub headlines: Headlines,
    rules: Vec<Box<dyn Rule>>,
}

impl ScoringPolicy {
    pub fn new(mode: ScoringMode, baseline: u32, headlines: Headlines) -> Self {
        Self {
            mode,
            baseline,
            headlines,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn for_mode(mode: ScoringMode) -> Self {
        match mode {
            ScoringMode::Detailed => Self::detailed(),
            ScoringMode::Basic => Self::basic(),
        }
    }

    /// Runs every rule in order, subtracts penalties from the baseline and
    /// floors the result at zero. Suggestions come back sorted by priority.
    pub fn evaluate(&self, resume: &ResumeRecord) -> OptimizationReport {
        let mut score = i64::from(self.baseline);
        let mut suggestions = Vec::new();

        for rule in &self.rules {
            for finding in rule.evaluate(resume) {
                score -= i64::from(finding.penalty);
                suggestions.push(finding.suggestion);
            }
        }

        let score = score.max(0) as u32;
        sort_by_priority(&mut suggestions);
        let rating = Rating::from_score(score);

        debug!(
            policy = self.mode.as_str(),
            score,
            suggestions = suggestions.len(),
            "resume scored"
        );

        OptimizationReport {
            score,
            suggestions,
            policy: self.mode.to_string(),
            rating,
            headline: self.headlines.for_rating(rating).to_string(),
        }
    }

    /// Recruiter-impact analysis: power words, metrics, keyword density,
    /// timeline gaps and profile completeness.
    pub fn detailed() -> Self {
        Self::new(
            ScoringMode::Detailed,
            85,
            Headlines {
                excellent: "Excellent! Your resume is highly optimized",
                good: "Good resume, but room for improvement",
                needs_improvement: "Needs improvement for better recruiter impact",
            },
        )
        .with_rule(PowerWordRule {
            words: POWER_WORDS,
            remedy: Remedy {
                kind: SuggestionKind::Impact,
                section: "Experience",
                message: "Replace weak verbs with power words (spearheaded, orchestrated, accelerated) to show impact and leadership",
                priority: Priority::High,
                actionable: Some("Use action verbs that demonstrate results: 'Led' → 'Spearheaded', 'Made' → 'Orchestrated', 'Improved' → 'Accelerated'"),
                penalty: 8,
            },
        })
        .with_rule(ExperienceMetricsRule {
            missing: Remedy {
                kind: SuggestionKind::Content,
                section: "Experience",
                message: "Add quantifiable metrics to demonstrate tangible results (percentages, revenue, time saved)",
                priority: Priority::High,
                actionable: Some("Examples: 'Increased sales by 45%', 'Reduced costs by $200K', 'Improved efficiency by 3x', 'Managed team of 12'"),
                penalty: 10,
            },
            sparse: Remedy {
                kind: SuggestionKind::Content,
                section: "Experience",
                message: "You have {count} quantifiable metrics. Aim for at least {target} (one per role)",
                priority: Priority::Medium,
                actionable: Some("Add measurable outcomes to remaining experience entries"),
                penalty: 4,
            },
        })
        .with_rule(KeywordDensityRule {
            vocabulary: INDUSTRY_KEYWORDS,
            min_hits: 5,
            remedy: Remedy {
                kind: SuggestionKind::Keywords,
                section: "Skills & Experience",
                message: "Include more industry-specific keywords ({count}/25 found). This improves ATS matching",
                priority: Priority::High,
                actionable: Some("Add technical skills, frameworks, and tools relevant to your target roles. Check job descriptions for common keywords"),
                penalty: 8,
            },
        })
        .with_rule(SummaryLengthRule {
            min_chars: 100,
            remedy: Remedy {
                kind: SuggestionKind::Content,
                section: "Professional Summary",
                message: "Strengthen your summary with specific achievements and career objectives (100-150 words ideal)",
                priority: Priority::High,
                actionable: Some("Include: years of experience, key expertise, major achievement, and career goal. Example: 'Senior Software Engineer with 8+ years experience leading cross-functional teams to deliver scalable solutions. Expert in cloud architecture, resulting in 40% cost reduction.'"),
                penalty: 7,
            },
        })
        .with_rule(LinkedInRule {
            remedy: Remedy {
                kind: SuggestionKind::Ats,
                section: "Contact Information",
                message: "Add LinkedIn profile - 95% of recruiters verify candidates via LinkedIn",
                priority: Priority::High,
                actionable: Some("Include your full LinkedIn URL in contact section"),
                penalty: 5,
            },
        })
        .with_rule(EmploymentGapRule {
            max_gap_months: 2,
            remedy: Remedy {
                kind: SuggestionKind::Formatting,
                section: "Experience Timeline",
                message: "Address employment gaps by explaining them (education, freelance, sabbatical)",
                priority: Priority::Medium,
                actionable: Some("Add context for gaps: 'Completed AWS Solutions Architect certification' or 'Freelance consultant'"),
                penalty: 4,
            },
        })
        .with_rule(ProjectMetricsRule {
            remedy: Remedy {
                kind: SuggestionKind::Impact,
                section: "Projects",
                message: "Highlight project impact with metrics (users, performance improvement, adoption rate)",
                priority: Priority::Medium,
                actionable: Some("Examples: 'Served 50K+ users', 'Reduced load time by 60%', '2M+ downloads', 'Achieved 99.9% uptime'"),
                penalty: 5,
            },
        })
        .with_rule(SkillOrganizationRule {
            max_skills: 20,
            remedy: Remedy {
                kind: SuggestionKind::Structure,
                section: "Skills",
                message: "Consider grouping {count} skills into categories (Languages, Frameworks, Tools)",
                priority: Priority::Low,
                actionable: Some("Group skills: Frontend (React, Vue), Backend (Node.js, Python), DevOps (Docker, Kubernetes)"),
                penalty: 0,
            },
        })
        .with_rule(PresenceRule {
            collection: Collection::Certificates,
            fire_when: FireWhen::Empty,
            remedy: Remedy {
                kind: SuggestionKind::Keywords,
                section: "Certifications",
                message: "Add relevant certifications to increase credibility and ATS keyword matching",
                priority: Priority::Medium,
                actionable: Some("Include: AWS, Azure, GCP, Kubernetes, Terraform, or industry-specific certifications"),
                penalty: 4,
            },
        })
        .with_rule(EmailFormatRule {
            remedy: Remedy {
                kind: SuggestionKind::Ats,
                section: "Email",
                message: "Ensure email address is clearly formatted and correct",
                priority: Priority::High,
                actionable: Some("Use professional email format: firstname.lastname@domain.com"),
                penalty: 5,
            },
        })
    }

    /// ATS compatibility check: summary, keywords, section completeness.
    pub fn basic() -> Self {
        Self::new(
            ScoringMode::Basic,
            90,
            Headlines {
                excellent: "Excellent! Your resume is ATS-optimized",
                good: "Good resume, but room for improvement",
                needs_improvement: "Needs improvement for better ATS compatibility",
            },
        )
        .with_rule(SummaryLengthRule {
            min_chars: 50,
            remedy: Remedy {
                kind: SuggestionKind::Ats,
                section: "Personal Info",
                message: "Add a professional summary (50+ words) - ATS systems prioritize resumes with clear summaries",
                priority: Priority::High,
                actionable: None,
                penalty: 15,
            },
        })
        .with_rule(CommonKeywordRule {
            keywords: COMMON_KEYWORDS,
            remedy: Remedy {
                kind: SuggestionKind::Keywords,
                section: "Content",
                message: "Include industry-relevant keywords to improve ATS matching and searchability",
                priority: Priority::High,
                actionable: None,
                penalty: 10,
            },
        })
        .with_rule(LinkedInRule {
            remedy: Remedy {
                kind: SuggestionKind::Content,
                section: "Personal Info",
                message: "Add LinkedIn profile - 87% of recruiters use LinkedIn to verify candidates",
                priority: Priority::Medium,
                actionable: None,
                penalty: 5,
            },
        })
        .with_rule(ExperienceDetailRule {
            missing: Remedy {
                kind: SuggestionKind::Content,
                section: "Experience",
                message: "Add work experience with quantifiable achievements and action verbs",
                priority: Priority::High,
                actionable: None,
                penalty: 20,
            },
            min_description_chars: 100,
            short_description: Remedy {
                kind: SuggestionKind::Content,
                section: "Experience",
                message: "Expand {position} description with specific metrics and achievements (aim for 100+ words)",
                priority: Priority::Medium,
                actionable: None,
                penalty: 3,
            },
            action_verbs: ACTION_VERBS,
            weak_verbs: Remedy {
                kind: SuggestionKind::Formatting,
                section: "Experience",
                message: "Use strong action verbs in {position} description (achieved, managed, led, etc.)",
                priority: Priority::Medium,
                actionable: None,
                penalty: 2,
            },
        })
        .with_rule(SkillCountRule {
            min_skills: 8,
            remedy: Remedy {
                kind: SuggestionKind::Keywords,
                section: "Skills",
                message: "Add more relevant skills (aim for 8-15) to improve keyword matching with job descriptions",
                priority: Priority::Medium,
                actionable: None,
                penalty: 5,
            },
        })
        .with_rule(PresenceRule {
            collection: Collection::Projects,
            fire_when: FireWhen::Empty,
            remedy: Remedy {
                kind: SuggestionKind::Content,
                section: "Projects",
                message: "Add projects to demonstrate practical skills and initiative - especially important for tech roles",
                priority: Priority::Medium,
                actionable: None,
                penalty: 8,
            },
        })
        .with_rule(EnabledSectionsRule {
            min_enabled: 4,
            remedy: Remedy {
                kind: SuggestionKind::Structure,
                section: "Layout",
                message: "Enable more sections for a comprehensive resume - ATS systems favor complete profiles",
                priority: Priority::Medium,
                actionable: None,
                penalty: 5,
            },
        })
        .with_rule(PresenceRule {
            collection: Collection::Education,
            fire_when: FireWhen::Empty,
            remedy: Remedy {
                kind: SuggestionKind::Content,
                section: "Education",
                message: "Add education details - required by most ATS systems for initial screening",
                priority: Priority::Medium,
                actionable: None,
                penalty: 7,
            },
        })
        .with_rule(PresenceRule {
            collection: Collection::Certificates,
            fire_when: FireWhen::Present,
            remedy: Remedy {
                kind: SuggestionKind::Content,
                section: "Certificates",
                message: "Great! Certifications boost your ATS score and demonstrate continuous learning",
                priority: Priority::Low,
                actionable: None,
                penalty: 0,
            },
        })
    }
}
