use std::collections::BTreeMap;
use std::sync::Arc;

use reumacal_core::{history, s3_keys, NewScoreRecord, PatientId, ScoreRecord};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::store::{prepare_record, ScoreStore};

/// Process-local store keyed like the S3 bucket. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryScoreStore {
    records: Arc<RwLock<BTreeMap<String, ScoreRecord>>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record as-is, bypassing the score check. For seeding history.
    pub async fn insert_record(&self, record: ScoreRecord) -> Result<(), StorageError> {
        let key = s3_keys::score_record(&record.patient_id, record.id);
        let mut records = self.records.write().await;
        if records.contains_key(&key) {
            return Err(StorageError::AlreadyExists { key });
        }
        records.insert(key, record);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl ScoreStore for MemoryScoreStore {
    async fn create_score_record(&self, new: NewScoreRecord) -> Result<ScoreRecord, StorageError> {
        let record = prepare_record(new, jiff::Timestamp::now())?;
        self.insert_record(record.clone()).await?;
        tracing::debug!(
            patient_id = %record.patient_id,
            instrument = %record.instrument,
            "score record saved in memory"
        );
        Ok(record)
    }

    async fn list_score_records(&self, patient_id: PatientId) -> Result<Vec<ScoreRecord>, StorageError> {
        let prefix = s3_keys::patient_scores_prefix(&patient_id);
        let records = self.records.read().await;
        let matching = records
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .map(|(_, record)| record.clone())
            .collect();
        Ok(history::newest_first(matching))
    }
}
