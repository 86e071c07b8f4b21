//! Learning-path generation pipeline.
//!
//! Flow: validate skills → build prompt → LLM complete → pair steps →
//!       persist raw text → return steps.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::learning_path::parser::parse_learning_path;
use crate::learning_path::prompts::build_learning_path_prompt;
use crate::llm_client::TextGenerator;
use crate::models::learning_path::LearningPathRecord;
use crate::models::StoredRecord;
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct LearningPathOutcome {
    pub id: Uuid,
    pub path: Vec<String>,
}

/// Generates, normalizes and stores a learning path for `user_id`.
///
/// Skills are trimmed and blank entries dropped first; an empty list is a
/// validation error and no LLM call is made.
pub async fn generate_learning_path(
    generator: &dyn TextGenerator,
    store: &dyn RecordStore,
    user_id: Uuid,
    skills: Vec<String>,
) -> Result<LearningPathOutcome, AppError> {
    let skills: Vec<String> = skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if skills.is_empty() {
        return Err(AppError::Validation("Skills are required.".to_string()));
    }

    info!("Generating learning path for user {user_id} from {} skills", skills.len());

    let prompt = build_learning_path_prompt(&skills);
    let raw_text = generator
        .complete(&prompt)
        .await
        .map_err(|e| AppError::generation("generate learning path", e))?;

    let path = parse_learning_path(&raw_text);

    let record = StoredRecord::LearningPath(LearningPathRecord {
        user_id,
        skills_used: skills,
        generated_path_text: raw_text,
        created_at: Utc::now(),
    });
    let id = store
        .save(&record)
        .await
        .map_err(|e| AppError::storage("save learning path", e))?;

    info!("Learning path {id} saved with {} steps", path.len());

    Ok(LearningPathOutcome { id, path })
}
