use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text model behind every AI feature. `GeminiClient` in production.
    pub llm: Arc<dyn TextGenerator>,
    /// Where generated records go. `PgRecordStore` in production.
    pub store: Arc<dyn RecordStore>,
}
