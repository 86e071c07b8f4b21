use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::interview::MockInterviewRecord;
use crate::models::learning_path::LearningPathRecord;
use crate::models::resume::ResumeAnalysisRecord;
use crate::models::StoredRecord;
use crate::store::{RecordStore, StoreError};

/// Postgres-backed record store. One table per record kind; rows are insert-only.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_learning_path(
        &self,
        id: Uuid,
        record: &LearningPathRecord,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO learning_paths (id, user_id, skills_used, generated_path_text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(record.user_id)
        .bind(&record.skills_used)
        .bind(&record.generated_path_text)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_mock_interview(
        &self,
        id: Uuid,
        record: &MockInterviewRecord,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO mock_interviews (id, user_id, job_role, questions, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(record.user_id)
        .bind(&record.job_role)
        .bind(Json(&record.questions))
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_resume_analysis(
        &self,
        id: Uuid,
        record: &ResumeAnalysisRecord,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO resume_analyses (id, resume_url, feedback, parsed_text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&record.resume_url)
        .bind(&record.feedback)
        .bind(&record.parsed_text)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn save(&self, record: &StoredRecord) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        match record {
            StoredRecord::LearningPath(r) => self.insert_learning_path(id, r).await?,
            StoredRecord::MockInterview(r) => self.insert_mock_interview(id, r).await?,
            StoredRecord::ResumeAnalysis(r) => self.insert_resume_analysis(id, r).await?,
        }
        info!("Saved {} record {id}", record.kind());
        Ok(id)
    }
}
