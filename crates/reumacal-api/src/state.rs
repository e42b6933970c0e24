use reumacal_core::{NewScoreRecord, PatientId, ScoreRecord};
use reumacal_storage::{MemoryScoreStore, S3ScoreStore, ScoreStore, StorageError};

/// The score store selected at startup.
#[derive(Clone)]
pub enum Backend {
    S3(S3ScoreStore),
    Memory(MemoryScoreStore),
}

impl ScoreStore for Backend {
    async fn create_score_record(&self, new: NewScoreRecord) -> Result<ScoreRecord, StorageError> {
        match self {
            Backend::S3(store) => store.create_score_record(new).await,
            Backend::Memory(store) => store.create_score_record(new).await,
        }
    }

    async fn list_score_records(&self, patient_id: PatientId) -> Result<Vec<ScoreRecord>, StorageError> {
        match self {
            Backend::S3(store) => store.list_score_records(patient_id).await,
            Backend::Memory(store) => store.list_score_records(patient_id).await,
        }
    }
}

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Backend,
}

impl AppState {
    pub fn new(store: Backend) -> Self {
        Self { store }
    }
}
