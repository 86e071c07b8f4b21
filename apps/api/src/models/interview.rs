use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question together with the candidate's answer, as submitted for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaPair {
    pub question: String,
    #[serde(default)]
    pub user_answer: String,
}

/// One evaluated question. Built only by the evaluation normalizer.
/// Serialized with camelCase keys, both in API responses and in the stored JSONB array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QAFeedback {
    pub question: String,
    pub user_answer: String,
    pub feedback: String,
    /// Documented range is 0–10; the value is whatever integer the model wrote.
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockInterviewRecord {
    pub user_id: Uuid,
    pub job_role: String,
    pub questions: Vec<QAFeedback>,
    pub created_at: DateTime<Utc>,
}
