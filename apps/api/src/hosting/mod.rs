//! Resume hosting. Publishes a snapshot of a user's resume under a public
//! slug and counts views.

pub mod handlers;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hosted::{HostedResume, TemplateType};
use crate::models::resume::ResumeRecord;
use crate::storage::{is_path_safe, HostingRepository};

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    #[serde(default)]
    pub template: TemplateType,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[serde(default)]
    pub custom_slug: Option<String>,
}

fn default_public() -> bool {
    true
}

/// Trimmed custom slug, or `None` when blank.
fn custom_base(custom_slug: Option<&str>) -> Option<&str> {
    custom_slug.map(str::trim).filter(|s| !s.is_empty())
}

/// Custom slugs become a single URL path segment, so they follow the same
/// character rules as user ids.
pub fn validate_custom_slug(custom_slug: Option<&str>) -> Result<(), AppError> {
    match custom_base(custom_slug) {
        Some(custom) if !is_path_safe(custom) => Err(AppError::Validation(format!(
            "Invalid custom URL '{custom}': use 1-64 letters, digits, '-' or '_'"
        ))),
        _ => Ok(()),
    }
}

/// Builds the public slug: the custom slug if one was given, otherwise the
/// lowercased full name with whitespace runs replaced by `-` and anything
/// other than letters, digits, `-` and `_` dropped. Then `-` and the last
/// four digits of the millisecond timestamp.
pub fn generate_slug(custom_slug: Option<&str>, full_name: &str, now: DateTime<Utc>) -> String {
    let base = match custom_base(custom_slug) {
        Some(custom) => custom.to_string(),
        None => WHITESPACE_RE
            .replace_all(&full_name.to_lowercase(), "-")
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect(),
    };
    let suffix = now.timestamp_millis().rem_euclid(10_000);
    format!("{base}-{suffix:04}")
}

/// Publishes `resume` for `user_id`. The resume must carry a full name, and
/// the repository rejects a slug that is already taken.
pub async fn publish(
    repo: &dyn HostingRepository,
    user_id: &str,
    resume: ResumeRecord,
    req: &PublishRequest,
    now: DateTime<Utc>,
) -> Result<HostedResume, AppError> {
    if !resume.is_scorable() {
        return Err(AppError::UnprocessableEntity(
            "Please add your name before hosting your resume".to_string(),
        ));
    }
    validate_custom_slug(req.custom_slug.as_deref())?;

    let url = generate_slug(
        req.custom_slug.as_deref(),
        &resume.personal_info.full_name,
        now,
    );

    let hosted = HostedResume {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        resume_data: resume,
        template: req.template,
        url,
        is_public: req.is_public,
        created_at: now,
        views: 0,
    };
    repo.insert(hosted.clone()).await?;

    info!(user_id, slug = %hosted.url, "Resume published");
    Ok(hosted)
}

/// Looks up a public snapshot and counts the view. Private and unknown slugs
/// are both reported as not found.
pub async fn view_public(repo: &dyn HostingRepository, slug: &str) -> Result<HostedResume, AppError> {
    let not_found = || AppError::NotFound(format!("Hosted resume '{slug}' not found"));

    let hosted = repo
        .find_by_slug(slug)
        .await?
        .filter(|h| h.is_public)
        .ok_or_else(not_found)?;
    repo.record_view(&hosted.url).await?.ok_or_else(not_found)
}
