//! Axum route handlers for the Optimization API.

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::optimization::policy::ScoringMode;
use crate::optimization::report::OptimizationReport;
use crate::state::AppState;
use crate::storage::validate_user_id;

/// `?mode=` is parsed with `ScoringMode::from_str`, so it accepts the same
/// spellings as `SCORING_MODE` and fails with the JSON error body.
#[derive(Debug, Default, Deserialize)]
pub struct ModeQuery {
    pub mode: Option<String>,
}

impl ModeQuery {
    pub fn scoring_mode(&self) -> Result<Option<ScoringMode>, AppError> {
        self.mode
            .as_deref()
            .map(|raw| raw.parse::<ScoringMode>().map_err(AppError::Validation))
            .transpose()
    }
}

/// Scores `resume` with the requested (or configured) policy, without any
/// delay. Rejects resumes without a full name.
pub fn score_resume(
    state: &AppState,
    resume: &ResumeRecord,
    mode: Option<ScoringMode>,
) -> Result<OptimizationReport, AppError> {
    if !resume.is_scorable() {
        return Err(AppError::UnprocessableEntity(
            "Add your full name before running resume optimization".to_string(),
        ));
    }

    let mode = mode.unwrap_or(state.config.scoring_mode);
    Ok(state.scorer.score(resume, mode))
}

/// `score_resume` behind the configured analysis delay. Only the
/// optimization endpoints wait; saving never does.
pub async fn run_optimization(
    state: &AppState,
    resume: &ResumeRecord,
    mode: Option<ScoringMode>,
) -> Result<OptimizationReport, AppError> {
    if resume.is_scorable() && state.config.analysis_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.analysis_delay_ms)).await;
    }

    score_resume(state, resume, mode)
}

/// POST /api/v1/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Query(query): Query<ModeQuery>,
    Json(resume): Json<ResumeRecord>,
) -> Result<Json<OptimizationReport>, AppError> {
    let mode = query.scoring_mode()?;
    let report = run_optimization(&state, &resume, mode).await?;
    Ok(Json(report))
}

/// GET /api/v1/users/:user_id/resume/optimization
pub async fn handle_stored_optimization(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ModeQuery>,
) -> Result<Json<OptimizationReport>, AppError> {
    validate_user_id(&user_id)?;
    let mode = query.scoring_mode()?;
    let resume = state
        .resumes
        .get(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume saved for user {user_id}")))?;

    let report = run_optimization(&state, &resume, mode).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(mode: Option<&str>) -> ModeQuery {
        ModeQuery {
            mode: mode.map(str::to_string),
        }
    }

    #[test]
    fn test_mode_query_matches_config_parsing() {
        assert_eq!(query(None).scoring_mode().unwrap(), None);
        assert_eq!(
            query(Some("Basic")).scoring_mode().unwrap(),
            Some(ScoringMode::Basic)
        );
        assert_eq!(
            query(Some(" DETAILED ")).scoring_mode().unwrap(),
            Some(ScoringMode::Detailed)
        );
    }

    #[test]
    fn test_unknown_mode_is_validation_error() {
        assert!(matches!(
            query(Some("llm")).scoring_mode(),
            Err(AppError::Validation(_))
        ));
    }
}
