use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeAnalysisRecord {
    /// Where the resume lives, when the caller has one. Uploads are not stored by this service.
    pub resume_url: Option<String>,
    pub feedback: String,
    pub parsed_text: String,
    pub created_at: DateTime<Utc>,
}
