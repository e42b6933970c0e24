use std::future::Future;

use reumacal_core::{NewScoreRecord, PatientId, ScoreRecord};
use uuid::Uuid;

use crate::error::StorageError;

/// Where score records are saved and listed.
pub trait ScoreStore: Send + Sync {
    /// Recompute the score from `new.components`, reject a mismatching
    /// total, then save it under a fresh id and timestamp. Never overwrites.
    fn create_score_record(
        &self,
        new: NewScoreRecord,
    ) -> impl Future<Output = Result<ScoreRecord, StorageError>> + Send;

    /// All records of a patient, newest first.
    fn list_score_records(
        &self,
        patient_id: PatientId,
    ) -> impl Future<Output = Result<Vec<ScoreRecord>, StorageError>> + Send;
}

/// Check `new` against its snapshot and turn it into a record.
pub fn prepare_record(
    new: NewScoreRecord,
    created_at: jiff::Timestamp,
) -> Result<ScoreRecord, StorageError> {
    let computed = new.recompute()?;
    if computed != new.total_score {
        return Err(StorageError::InconsistentScore {
            instrument: new.instrument,
            submitted: new.total_score,
            computed,
        });
    }
    Ok(new.into_record(Uuid::new_v4(), created_at))
}
