//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::optimization::handlers::score_resume;
use crate::optimization::report::OptimizationReport;
use crate::state::AppState;
use crate::storage::validate_user_id;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeResponse {
    pub saved_at: DateTime<Utc>,
    /// Fresh report for the saved snapshot; absent until a full name is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationReport>,
}

/// GET /api/v1/users/:user_id/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ResumeRecord>, AppError> {
    validate_user_id(&user_id)?;
    let resume = state
        .resumes
        .get(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume saved for user {user_id}")))?;
    Ok(Json(resume))
}

/// PUT /api/v1/users/:user_id/resume
///
/// Saves the snapshot first, then, once the resume has a name, re-scores it
/// with the configured policy so the client can refresh its optimization
/// panel. The analysis delay does not apply here.
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(resume): Json<ResumeRecord>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    validate_user_id(&user_id)?;

    state.resumes.put(&user_id, resume.clone()).await?;
    info!(user_id = %user_id, "Resume saved");

    let optimization = if resume.is_scorable() {
        Some(score_resume(&state, &resume, None)?)
    } else {
        None
    };

    Ok(Json(SaveResumeResponse {
        saved_at: Utc::now(),
        optimization,
    }))
}
