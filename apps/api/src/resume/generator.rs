//! Resume analysis pipeline: resume text → LLM feedback → persisted analysis.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::resume::ResumeAnalysisRecord;
use crate::models::StoredRecord;
use crate::resume::prompts::build_resume_feedback_prompt;
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct ResumeOutcome {
    pub id: Uuid,
    pub feedback: String,
}

pub async fn analyze_resume(
    generator: &dyn TextGenerator,
    store: &dyn RecordStore,
    resume_text: String,
    resume_url: Option<String>,
) -> Result<ResumeOutcome, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation("Resume text is required.".to_string()));
    }

    info!("Analyzing resume ({} bytes)", resume_text.len());

    let prompt = build_resume_feedback_prompt(&resume_text);
    let feedback = generator
        .complete(&prompt)
        .await
        .map_err(|e| AppError::generation("analyze resume", e))?;

    let record = StoredRecord::ResumeAnalysis(ResumeAnalysisRecord {
        resume_url,
        feedback: feedback.clone(),
        parsed_text: resume_text,
        created_at: Utc::now(),
    });
    let id = store
        .save(&record)
        .await
        .map_err(|e| AppError::storage("save resume analysis", e))?;

    Ok(ResumeOutcome { id, feedback })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;
    use crate::store::testing::MemoryStore;

    #[tokio::test]
    async fn test_feedback_returned_and_stored_with_text() {
        let generator = ScriptedGenerator::replying("Add quantified achievements.");
        let store = MemoryStore::default();

        let outcome = analyze_resume(
            &generator,
            &store,
            "Jane Doe\nRust engineer".to_string(),
            Some("https://files.example.com/jane.pdf".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(outcome.feedback, "Add quantified achievements.");
        assert!(generator.prompts()[0].contains("\"Jane Doe\nRust engineer\""));
        match &store.records()[0] {
            StoredRecord::ResumeAnalysis(r) => {
                assert_eq!(r.parsed_text, "Jane Doe\nRust engineer");
                assert_eq!(r.feedback, "Add quantified achievements.");
                assert_eq!(r.resume_url.as_deref(), Some("https://files.example.com/jane.pdf"));
            }
            other => panic!("unexpected record {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_resume_rejected() {
        let generator = ScriptedGenerator::replying("unused");
        let store = MemoryStore::default();
        let err = analyze_resume(&generator, &store, " \n".to_string(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_generation_failure_prefixed() {
        let generator = ScriptedGenerator::failing(500, "internal");
        let store = MemoryStore::default();
        let err = analyze_resume(&generator, &store, "resume".to_string(), None)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to analyze resume: "));
        assert!(store.records().is_empty());
    }
}
