use aws_sdk_s3::Client;
use reumacal_core::{history, s3_keys, NewScoreRecord, PatientId, ScoreRecord};

use crate::error::StorageError;
use crate::objects;
use crate::store::{prepare_record, ScoreStore};

/// Score records as JSON objects in an S3 bucket, one object per record.
#[derive(Clone)]
pub struct S3ScoreStore {
    client: Client,
    bucket: String,
}

impl S3ScoreStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl ScoreStore for S3ScoreStore {
    async fn create_score_record(&self, new: NewScoreRecord) -> Result<ScoreRecord, StorageError> {
        let record = prepare_record(new, jiff::Timestamp::now())?;
        let key = s3_keys::score_record(&record.patient_id, record.id);
        let body = record.to_json()?;

        objects::put_object_if_none_match(
            &self.client,
            &self.bucket,
            &key,
            body,
            Some("application/json"),
        )
        .await?;

        tracing::info!(
            key = %key,
            instrument = %record.instrument,
            total_score = record.total_score,
            "score record saved"
        );
        Ok(record)
    }

    async fn list_score_records(&self, patient_id: PatientId) -> Result<Vec<ScoreRecord>, StorageError> {
        let prefix = s3_keys::patient_scores_prefix(&patient_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| k.ends_with(".json")) {
            let body = objects::get_object(&self.client, &self.bucket, key).await?;
            let record = ScoreRecord::from_json(&body)?;
            if !record.is_consistent() {
                tracing::warn!(key = %key, "stored score does not match its components");
            }
            records.push(record);
        }

        tracing::debug!(patient_id = %patient_id, count = records.len(), "score records listed");
        Ok(history::newest_first(records))
    }
}
