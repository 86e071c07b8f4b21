use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One learning-path generation, stored once and never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct LearningPathRecord {
    pub user_id: Uuid,
    /// Skills in the order the user supplied them.
    pub skills_used: Vec<String>,
    /// Raw model output, before step pairing.
    pub generated_path_text: String,
    pub created_at: DateTime<Utc>,
}
