//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::extract::{extract_pdf_text, validate_pdf_upload};
use crate::resume::generator::analyze_resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    #[serde(default)]
    pub resume_text: String,
    pub resume_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeResponse {
    pub id: Uuid,
    pub resume_url: Option<String>,
    pub feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/analyze
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    request: Result<Json<AnalyzeResumeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    let Json(request) = request.map_err(AppError::from)?;
    let resume_url = request.resume_url.clone();
    let outcome = analyze_resume(
        state.llm.as_ref(),
        state.store.as_ref(),
        request.resume_text,
        request.resume_url,
    )
    .await?;

    Ok(Json(AnalyzeResumeResponse {
        id: outcome.id,
        resume_url,
        feedback: outcome.feedback,
    }))
}

/// POST /api/resume/upload
///
/// Multipart form: `resume` (PDF file, required), `resumeUrl` (text, optional).
/// The file is read in memory for its text and not kept.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    let mut resume_url = None;
    let mut resume_file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                validate_pdf_upload(&file_name, &data)?;
                resume_file = Some((file_name, data));
            }
            "resumeUrl" => {
                let url = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resumeUrl: {e}")))?;
                resume_url = Some(url).filter(|u| !u.trim().is_empty());
            }
            _ => {}
        }
    }

    let (file_name, data) = resume_file
        .ok_or_else(|| AppError::Validation("A PDF file in field 'resume' is required".to_string()))?;

    let resume_text = extract_pdf_text(data).await?;
    info!("Extracted {} chars from {file_name}", resume_text.chars().count());

    let outcome = analyze_resume(
        state.llm.as_ref(),
        state.store.as_ref(),
        resume_text,
        resume_url.clone(),
    )
    .await?;

    Ok(Json(AnalyzeResumeResponse {
        id: outcome.id,
        resume_url,
        feedback: outcome.feedback,
    }))
}
