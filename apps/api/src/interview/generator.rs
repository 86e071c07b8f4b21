//! Mock interview pipelines.
//!
//! Start:  validate role → questions prompt → LLM complete → split lines.
//! Submit: validate role + answers → evaluation prompt → LLM complete →
//!         parse blocks → persist record → return feedback.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::parser::{parse_interview_evaluation, parse_interview_questions};
use crate::interview::prompts::{build_interview_evaluation_prompt, build_interview_questions_prompt};
use crate::llm_client::TextGenerator;
use crate::models::interview::{MockInterviewRecord, QAFeedback, QaPair};
use crate::models::StoredRecord;
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct InterviewOutcome {
    pub id: Uuid,
    pub result: Vec<QAFeedback>,
    /// Evaluation blocks the model wrote in an unexpected layout.
    pub skipped: usize,
}

fn require_role(role: &str) -> Result<&str, AppError> {
    let role = role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("Job role is required.".to_string()));
    }
    Ok(role)
}

/// Asks the model for interview questions for `role`. Nothing is persisted.
pub async fn start_mock_interview(
    generator: &dyn TextGenerator,
    role: &str,
) -> Result<Vec<String>, AppError> {
    let role = require_role(role)?;

    let prompt = build_interview_questions_prompt(role);
    let raw_text = generator
        .complete(&prompt)
        .await
        .map_err(|e| AppError::generation("generate interview questions", e))?;

    let questions = parse_interview_questions(&raw_text);
    info!("Generated {} interview questions for role {role:?}", questions.len());

    Ok(questions)
}

/// Evaluates submitted answers and stores the parsed feedback.
pub async fn submit_mock_interview(
    generator: &dyn TextGenerator,
    store: &dyn RecordStore,
    user_id: Uuid,
    role: &str,
    qa_pairs: &[QaPair],
) -> Result<InterviewOutcome, AppError> {
    let role = require_role(role)?;
    if qa_pairs.is_empty() {
        return Err(AppError::Validation(
            "At least one question and answer is required.".to_string(),
        ));
    }

    info!(
        "Evaluating {} answers for user {user_id}, role {role:?}",
        qa_pairs.len()
    );

    let prompt = build_interview_evaluation_prompt(qa_pairs);
    let raw_text = generator
        .complete(&prompt)
        .await
        .map_err(|e| AppError::generation("evaluate answers", e))?;

    let parsed = parse_interview_evaluation(&raw_text, qa_pairs);

    let record = StoredRecord::MockInterview(MockInterviewRecord {
        user_id,
        job_role: role.to_string(),
        questions: parsed.feedback.clone(),
        created_at: Utc::now(),
    });
    let id = store
        .save(&record)
        .await
        .map_err(|e| AppError::storage("save mock interview", e))?;

    info!(
        "Mock interview {id} saved: {} evaluated, {} skipped",
        parsed.feedback.len(),
        parsed.skipped.len()
    );

    Ok(InterviewOutcome {
        id,
        result: parsed.feedback,
        skipped: parsed.skipped.len(),
    })
}
