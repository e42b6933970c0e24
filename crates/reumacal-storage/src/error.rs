use reumacal_core::CoreError;
use reumacal_instruments::{InstrumentCode, InstrumentError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("object already exists: {key}")]
    AlreadyExists { key: String },

    /// The submitted total does not match the score recomputed from the
    /// submitted components.
    #[error("{instrument} total {submitted} does not match computed score {computed}")]
    InconsistentScore {
        instrument: InstrumentCode,
        submitted: f64,
        computed: f64,
    },

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("record error: {0}")]
    Record(#[from] CoreError),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),
}
