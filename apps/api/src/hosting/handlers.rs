//! Axum route handlers for the Hosting API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::hosting::{publish, view_public, PublishRequest};
use crate::models::hosted::HostedResume;
use crate::state::AppState;
use crate::storage::validate_user_id;

/// POST /api/v1/users/:user_id/hosted
pub async fn handle_publish(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<PublishRequest>,
) -> Result<(StatusCode, Json<HostedResume>), AppError> {
    validate_user_id(&user_id)?;
    let resume = state
        .resumes
        .get(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume saved for user {user_id}")))?;

    let hosted = publish(state.hosting.as_ref(), &user_id, resume, &req, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(hosted)))
}

/// GET /api/v1/users/:user_id/hosted
pub async fn handle_list_hosted(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<HostedResume>>, AppError> {
    validate_user_id(&user_id)?;
    Ok(Json(state.hosting.list_for_user(&user_id).await?))
}

/// DELETE /api/v1/users/:user_id/hosted/:id
pub async fn handle_delete_hosted(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(String, Uuid)>,
) -> Result<StatusCode, AppError> {
    validate_user_id(&user_id)?;
    if state.hosting.delete(&user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Hosted resume {id} not found")))
    }
}

/// GET /api/v1/hosted/:slug
pub async fn handle_view_hosted(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<HostedResume>, AppError> {
    Ok(Json(view_public(state.hosting.as_ref(), &slug).await?))
}
