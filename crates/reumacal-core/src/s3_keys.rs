//! S3 key/path conventions.
//!
//! Pure string functions. Every score record is its own object under the
//! patient's prefix, so saving never rewrites an existing object.

use uuid::Uuid;

use crate::models::patient::PatientId;

pub const SCORES_PREFIX: &str = "scores/";

pub fn patient_scores_prefix(patient_id: &PatientId) -> String {
    format!("{SCORES_PREFIX}{patient_id}/")
}

pub fn score_record(patient_id: &PatientId, id: Uuid) -> String {
    format!("{SCORES_PREFIX}{patient_id}/{id}.json")
}
