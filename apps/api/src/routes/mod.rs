pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::learning_path::handlers as learning_path;
use crate::resume::extract::MAX_RESUME_BYTES;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Multipart framing on top of the largest accepted file.
const UPLOAD_BODY_LIMIT: usize = MAX_RESUME_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/learning-path",
            post(learning_path::handle_generate_learning_path),
        )
        .route(
            "/api/mock-interview/start",
            post(interview::handle_start_interview),
        )
        .route(
            "/api/mock-interview/submit",
            post(interview::handle_submit_interview),
        )
        .route("/api/resume/analyze", post(resume::handle_analyze_resume))
        .route(
            "/api/resume/upload",
            post(resume::handle_upload_resume).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .with_state(state)
}
