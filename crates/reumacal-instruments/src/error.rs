use thiserror::Error;

use crate::code::InstrumentCode;
use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The formula produced NaN or an infinity from validated inputs.
    #[error("{instrument} formula produced a non-finite result")]
    NonFiniteResult { instrument: InstrumentCode },
}
