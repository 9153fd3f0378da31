#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Full resume document as edited by the builder. Field names follow the
/// camelCase shape the client has always persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sections: Vec<ResumeSection>,
}

impl Default for ResumeRecord {
    /// An empty resume with the builder's six default sections, all enabled.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experience: vec![],
            education: vec![],
            projects: vec![],
            certificates: vec![],
            activities: vec![],
            skills: vec![],
            sections: default_sections(),
        }
    }
}

impl ResumeRecord {
    /// Scoring is only meaningful once the user has entered a name.
    pub fn is_scorable(&self) -> bool {
        !self.personal_info.full_name.is_empty()
    }

    pub fn enabled_section_count(&self) -> usize {
        self.sections.iter().filter(|s| s.enabled).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl PersonalInfo {
    /// `None` and `Some("")` are both treated as "no profile".
    pub fn linkedin_url(&self) -> Option<&str> {
        self.linkedin.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    /// "YYYY-MM" or empty.
    #[serde(default)]
    pub start_date: String,
    /// "YYYY-MM" or empty.
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub graduation_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Additional activities. Each kind carries only the fields its form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Activity {
    Volunteer(VolunteerActivity),
    Award(AwardActivity),
    Publication(PublicationActivity),
    Language(LanguageActivity),
    Extracurricular(ExtracurricularActivity),
    Leadership(LeadershipActivity),
    Other(OtherActivity),
}

impl Activity {
    pub fn id(&self) -> &str {
        match self {
            Activity::Volunteer(a) => &a.id,
            Activity::Award(a) => &a.id,
            Activity::Publication(a) => &a.id,
            Activity::Language(a) => &a.id,
            Activity::Extracurricular(a) => &a.id,
            Activity::Leadership(a) => &a.id,
            Activity::Other(a) => &a.id,
        }
    }

    /// Headline shown for the activity: the organization for volunteer work,
    /// the title for everything else.
    pub fn headline(&self) -> &str {
        match self {
            Activity::Volunteer(a) => &a.organization,
            Activity::Award(a) => &a.title,
            Activity::Publication(a) => &a.title,
            Activity::Language(a) => &a.title,
            Activity::Extracurricular(a) => &a.title,
            Activity::Leadership(a) => &a.title,
            Activity::Other(a) => &a.title,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerActivity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardActivity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationActivity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Publisher or journal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageActivity {
    #[serde(default)]
    pub id: String,
    /// The language itself.
    #[serde(default)]
    pub title: String,
    /// Proficiency, e.g. "Native" or "C1".
    #[serde(default)]
    pub level: String,
    /// Certification or test, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtracurricularActivity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadershipActivity {
    #[serde(default)]
    pub id: String,
    /// The leadership role.
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Team size or scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherActivity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Experience,
    Education,
    Projects,
    Certificates,
    Activities,
    Skills,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSection {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub enabled: bool,
    pub order: i32,
}

/// The builder's initial section layout.
pub fn default_sections() -> Vec<ResumeSection> {
    [
        ("experience", "Work Experience", SectionType::Experience),
        ("education", "Education", SectionType::Education),
        ("projects", "Projects", SectionType::Projects),
        ("certificates", "Certificates", SectionType::Certificates),
        ("activities", "Additional Activities", SectionType::Activities),
        ("skills", "Skills", SectionType::Skills),
    ]
    .into_iter()
    .enumerate()
    .map(|(order, (id, name, section_type))| ResumeSection {
        id: id.to_string(),
        name: name.to_string(),
        section_type,
        enabled: true,
        order: order as i32,
    })
    .collect()
}
