//! Record Store: persistence for generated records.
//!
//! Pipelines call `save` exactly once, after normalization succeeds.
//! `AppState` holds an `Arc<dyn RecordStore>`; Postgres is the default backend.

pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::StoredRecord;

pub use postgres::PgRecordStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists one record and returns its new id.
    async fn save(&self, record: &StoredRecord) -> Result<Uuid, StoreError>;
}

#[cfg(test)]
pub mod testing {
    //! In-memory store used by pipeline and router tests.

    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct MemoryStore {
        pub saved: Mutex<Vec<(Uuid, StoredRecord)>>,
        pub fail: bool,
    }

    impl MemoryStore {
        pub fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn records(&self) -> Vec<StoredRecord> {
            self.saved
                .lock()
                .unwrap()
                .iter()
                .map(|(_, r)| r.clone())
                .collect()
        }
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn save(&self, record: &StoredRecord) -> Result<Uuid, StoreError> {
            if self.fail {
                return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
            }
            let id = Uuid::new_v4();
            self.saved.lock().unwrap().push((id, record.clone()));
            Ok(id)
        }
    }
}
