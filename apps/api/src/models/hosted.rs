use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeRecord;

/// Visual template a hosted resume is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Executive,
    Tech,
}

/// A published snapshot of a user's resume, reachable under `url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedResume {
    pub id: Uuid,
    pub user_id: String,
    pub resume_data: ResumeRecord,
    pub template: TemplateType,
    /// Public slug, unique per snapshot.
    pub url: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub views: u64,
}
