use reumacal_instruments::{
    compute, interpret, InstrumentCode, InstrumentError, InstrumentInput, Interpretation, Score,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::patient::PatientId;
use crate::error::CoreError;

/// One saved score. Written once, never updated.
///
/// `components` is the input snapshot the score was computed from, so
/// `total_score` can always be recomputed and checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub patient_id: PatientId,
    pub instrument: InstrumentCode,
    pub total_score: f64,
    pub components: InstrumentInput,
    pub created_at: jiff::Timestamp,
}

impl ScoreRecord {
    pub fn from_score(patient_id: PatientId, score: Score, created_at: jiff::Timestamp) -> Self {
        NewScoreRecord::from_score(patient_id, score).into_record(Uuid::new_v4(), created_at)
    }

    /// Score computed from the stored snapshot.
    pub fn recompute(&self) -> Result<f64, InstrumentError> {
        compute(self.instrument, &self.components)
    }

    /// Whether `total_score` matches the snapshot.
    pub fn is_consistent(&self) -> bool {
        self.recompute().is_ok_and(|score| score == self.total_score)
    }

    pub fn interpretation(&self) -> Interpretation {
        interpret(self.instrument, self.total_score)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// A score to be saved: everything except the id and timestamp, which the
/// store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewScoreRecord {
    pub patient_id: PatientId,
    pub instrument: InstrumentCode,
    pub total_score: f64,
    pub components: InstrumentInput,
}

impl NewScoreRecord {
    pub fn from_score(patient_id: PatientId, score: Score) -> Self {
        Self {
            patient_id,
            instrument: score.instrument,
            total_score: score.value,
            components: score.input,
        }
    }

    pub fn recompute(&self) -> Result<f64, InstrumentError> {
        compute(self.instrument, &self.components)
    }

    pub fn into_record(self, id: Uuid, created_at: jiff::Timestamp) -> ScoreRecord {
        ScoreRecord {
            id,
            patient_id: self.patient_id,
            instrument: self.instrument,
            total_score: self.total_score,
            components: self.components,
            created_at,
        }
    }
}

/// A record with its band, as shown in a patient's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterpretedRecord {
    #[serde(flatten)]
    pub record: ScoreRecord,
    pub interpretation: Interpretation,
}

impl From<ScoreRecord> for InterpretedRecord {
    fn from(record: ScoreRecord) -> Self {
        let interpretation = record.interpretation();
        Self {
            record,
            interpretation,
        }
    }
}
