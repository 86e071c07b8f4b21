//! Axum route handler for the Learning Path API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::learning_path::generator::generate_learning_path;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub id: Uuid,
    pub path: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/learning-path
pub async fn handle_generate_learning_path(
    State(state): State<AppState>,
    request: Result<Json<LearningPathRequest>, JsonRejection>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let Json(request) = request.map_err(AppError::from)?;
    let outcome = generate_learning_path(
        state.llm.as_ref(),
        state.store.as_ref(),
        request.user_id,
        request.skills,
    )
    .await?;

    Ok(Json(LearningPathResponse {
        id: outcome.id,
        path: outcome.path,
    }))
}
