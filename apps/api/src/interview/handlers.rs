//! Axum route handlers for the Mock Interview API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::generator::{start_mock_interview, submit_mock_interview};
use crate::models::interview::{QAFeedback, QaPair};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInterviewRequest {
    #[serde(alias = "user")]
    pub user_id: Uuid,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub qa_pairs: Vec<QaPair>,
}

#[derive(Debug, Serialize)]
pub struct SubmitInterviewResponse {
    pub id: Uuid,
    pub message: String,
    pub result: Vec<QAFeedback>,
    pub skipped: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/mock-interview/start
pub async fn handle_start_interview(
    State(state): State<AppState>,
    request: Result<Json<StartInterviewRequest>, JsonRejection>,
) -> Result<Json<StartInterviewResponse>, AppError> {
    let Json(request) = request.map_err(AppError::from)?;
    let questions = start_mock_interview(state.llm.as_ref(), &request.role).await?;
    Ok(Json(StartInterviewResponse { questions }))
}

/// POST /api/mock-interview/submit
pub async fn handle_submit_interview(
    State(state): State<AppState>,
    request: Result<Json<SubmitInterviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitInterviewResponse>), AppError> {
    let Json(request) = request.map_err(AppError::from)?;
    let outcome = submit_mock_interview(
        state.llm.as_ref(),
        state.store.as_ref(),
        request.user_id,
        &request.role,
        &request.qa_pairs,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitInterviewResponse {
            id: outcome.id,
            message: "Mock interview saved".to_string(),
            result: outcome.result,
            skipped: outcome.skipped,
        }),
    ))
}
