//! reumacal-core
//!
//! Shared vocabulary of the ReumaCal system: persisted score records,
//! patient ids, history views and object key conventions.
//! No AWS SDK dependency.

pub mod error;
pub mod history;
pub mod models;
pub mod s3_keys;

pub use error::CoreError;
pub use models::patient::PatientId;
pub use models::score_record::{InterpretedRecord, NewScoreRecord, ScoreRecord};
