//! reumacal-instruments
//!
//! Rheumatology score engine. Pure computation: no I/O, no shared state.
//! Each instrument pairs a published formula with an ordered band table that
//! turns the score into a label, a severity tier and a display color.

pub mod code;
pub mod error;
pub mod instruments;
pub mod interpretation;
pub mod scoring;

pub use code::{InstrumentCode, LabMarker};
pub use error::InstrumentError;
pub use interpretation::{BandTable, Interpretation, Tier};
pub use scoring::{InstrumentInput, InputValue, Score, ScoreScale, ValidationError};

use scoring::{Field, FieldKind, RangeViolation, Section, Values};

/// Trait implemented by each clinical instrument.
pub trait Instrument: Send + Sync {
    fn code(&self) -> InstrumentCode;

    /// Human-readable short name (e.g., "BASDAI", "DAS28-ESR").
    fn name(&self) -> &str {
        self.code().display_name()
    }

    /// Full published name of the instrument.
    fn description(&self) -> &str;

    /// The input fields, grouped the way the instrument presents them.
    fn sections(&self) -> &[Section];

    fn scale(&self) -> ScoreScale {
        ScoreScale::TwoDecimals
    }

    fn bands(&self) -> &BandTable;

    /// Evaluate the formula on validated values, before rounding.
    fn formula(&self, values: &Values) -> f64;

    fn fields(&self) -> Vec<&Field> {
        self.sections().iter().flat_map(|s| &s.fields).collect()
    }

    /// Highest reachable score for checklist instruments (sum of all flag
    /// weights). `None` when any field is numeric.
    fn max_score(&self) -> Option<f64> {
        self.fields()
            .iter()
            .map(|field| match field.kind {
                FieldKind::Flag { weight } => Some(f64::from(weight)),
                FieldKind::Number { .. } => None,
            })
            .sum()
    }

    /// Validate `input`, evaluate the formula and round once.
    fn compute(&self, input: &InstrumentInput) -> Result<f64, InstrumentError> {
        let values = Values::resolve(self.code(), self.sections(), input)?;
        let raw = self.formula(&values);
        if !raw.is_finite() {
            return Err(InstrumentError::NonFiniteResult {
                instrument: self.code(),
            });
        }
        Ok(self.scale().apply(raw))
    }

    fn interpret(&self, score: f64) -> Interpretation {
        self.bands().classify(score)
    }

    /// Compute and keep the input alongside the value.
    fn score(&self, input: InstrumentInput) -> Result<Score, InstrumentError> {
        let value = self.compute(&input)?;
        Ok(Score {
            instrument: self.code(),
            value,
            scale: self.scale(),
            input,
        })
    }

    /// Numeric values outside their published range. Advisory only;
    /// [`Instrument::compute`] does not reject them.
    fn out_of_range(&self, input: &InstrumentInput) -> Vec<RangeViolation> {
        let mut violations = Vec::new();
        for field in self.fields() {
            let FieldKind::Number { range, .. } = &field.kind else {
                continue;
            };
            let value = match input.get(&field.key) {
                Some(InputValue::Number(v)) => *v,
                Some(InputValue::Text(text)) => match text.trim().parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => continue,
                },
                _ => continue,
            };
            if !range.contains(value) {
                violations.push(RangeViolation {
                    field: field.key.clone(),
                    value,
                    expected_range: *range,
                    message: format!(
                        "{}: {} value {} is outside range [{}, {}]",
                        self.name(),
                        field.label,
                        value,
                        range.min,
                        range.max,
                    ),
                });
            }
        }
        violations
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    InstrumentCode::ALL
        .into_iter()
        .map(InstrumentCode::instrument)
        .collect()
}

/// Look up an instrument by its stored code (e.g. "DAS28_CRP").
pub fn get_instrument(code: &str) -> Option<Box<dyn Instrument>> {
    code.parse::<InstrumentCode>().ok().map(InstrumentCode::instrument)
}

/// Compute the rounded score of `instrument` for `input`.
pub fn compute(instrument: InstrumentCode, input: &InstrumentInput) -> Result<f64, InstrumentError> {
    instrument.instrument().compute(input)
}

/// Band of `score` for `instrument`.
pub fn interpret(instrument: InstrumentCode, score: f64) -> Interpretation {
    instrument.instrument().interpret(score)
}

pub fn score(instrument: InstrumentCode, input: InstrumentInput) -> Result<Score, InstrumentError> {
    instrument.instrument().score(input)
}
