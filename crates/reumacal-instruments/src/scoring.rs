use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::code::InstrumentCode;
use crate::interpretation::Interpretation;

/// How an instrument's final value is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreScale {
    /// Rounded half away from zero to two decimal places.
    TwoDecimals,
    /// Whole-number count or weighted sum.
    Integer,
}

impl ScoreScale {
    /// Apply the rounding once, to the fully evaluated formula.
    pub fn apply(self, raw: f64) -> f64 {
        match self {
            ScoreScale::TwoDecimals => (raw * 100.0).round() / 100.0,
            ScoreScale::Integer => raw.round(),
        }
    }
}

/// Published range for a numeric field. Advisory: the engine reports values
/// outside it but still computes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64, step: Option<f64>) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// Mathematical domain a formula requires of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NumericDomain {
    Any,
    /// Used under a square root or `ln(x + 1)`.
    NonNegative,
    /// Used under `ln(x)`.
    Positive,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Number {
        range: ScoreRange,
        domain: NumericDomain,
        unit: Option<String>,
        /// Starting value offered by the entry form. Never substituted for a
        /// missing value.
        default_value: f64,
    },
    Flag {
        weight: u32,
    },
}

/// One input item of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn number(key: &str, label: &str, range: ScoreRange, default_value: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number {
                range,
                domain: NumericDomain::Any,
                unit: None,
                default_value,
            },
        }
    }

    pub fn flag(key: &str, label: &str, weight: u32) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FieldKind::Flag { weight },
        }
    }

    pub fn with_domain(mut self, new_domain: NumericDomain) -> Self {
        if let FieldKind::Number { domain, .. } = &mut self.kind {
            *domain = new_domain;
        }
        self
    }

    pub fn with_unit(mut self, new_unit: &str) -> Self {
        if let FieldKind::Number { unit, .. } = &mut self.kind {
            *unit = Some(new_unit.to_string());
        }
        self
    }
}

/// A group of fields, e.g. an organ system or a questionnaire block.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub fields: Vec<Field>,
    pub description: Option<String>,
}

impl Section {
    pub fn new(id: &str, name: &str, fields: Vec<Field>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            fields,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// A single submitted value. Form controls may send numbers as text, and a
/// cleared control sends `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum InputValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Number(value)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Flag(value)
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        InputValue::Text(value.to_string())
    }
}

/// Sub-item key to submitted value, as entered for one instrument.
///
/// Serializes as a plain JSON object, which is also the snapshot stored with
/// every score record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentInput(BTreeMap<String, InputValue>);

impl InstrumentInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<InputValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<InputValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&InputValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &InputValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<InputValue>> FromIterator<(K, V)> for InstrumentInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationReason {
    Missing,
    NotNumeric,
    NotBoolean,
    NotFinite,
    Negative,
    NotPositive,
}

/// A field the formula cannot be evaluated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub instrument: InstrumentCode,
    pub field: String,
    pub reason: ValidationReason,
    pub message: String,
}

impl ValidationError {
    pub fn new(instrument: InstrumentCode, field: &str, reason: ValidationReason) -> Self {
        let detail = match reason {
            ValidationReason::Missing => "is required".to_string(),
            ValidationReason::NotNumeric => "must be a number".to_string(),
            ValidationReason::NotBoolean => "must be true or false".to_string(),
            ValidationReason::NotFinite => "must be a finite number".to_string(),
            ValidationReason::Negative => "must not be negative".to_string(),
            ValidationReason::NotPositive => "must be greater than 0".to_string(),
        };
        Self {
            instrument,
            field: field.to_string(),
            reason,
            message: format!("{}: {field} {detail}", instrument.display_name()),
        }
    }
}

/// A value outside the published range of its field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RangeViolation {
    pub field: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
enum Resolved {
    Number(f64),
    Flag { set: bool, weight: u32 },
}

/// Validated field values in declaration order, ready for a formula.
#[derive(Debug, Clone)]
pub struct Values {
    entries: Vec<(String, Resolved)>,
}

impl Values {
    /// Check every declared field of `sections` against `input`.
    ///
    /// Fails on the first field that is missing, of the wrong kind, not
    /// finite, or outside its [`NumericDomain`]. Keys not declared by the
    /// instrument are ignored.
    pub fn resolve(
        instrument: InstrumentCode,
        sections: &[Section],
        input: &InstrumentInput,
    ) -> Result<Self, ValidationError> {
        let mut entries = Vec::new();
        for field in sections.iter().flat_map(|s| &s.fields) {
            let fail = |reason| ValidationError::new(instrument, &field.key, reason);
            let raw = match input.get(&field.key) {
                None | Some(InputValue::Null) => return Err(fail(ValidationReason::Missing)),
                Some(raw) => raw,
            };

            let resolved = match &field.kind {
                FieldKind::Number { domain, .. } => {
                    let value = match raw {
                        InputValue::Number(v) => *v,
                        InputValue::Text(text) => text
                            .trim()
                            .parse::<f64>()
                            .map_err(|_| fail(ValidationReason::NotNumeric))?,
                        InputValue::Flag(_) | InputValue::Null => {
                            return Err(fail(ValidationReason::NotNumeric));
                        }
                    };
                    if !value.is_finite() {
                        return Err(fail(ValidationReason::NotFinite));
                    }
                    match domain {
                        NumericDomain::NonNegative if value < 0.0 => {
                            return Err(fail(ValidationReason::Negative));
                        }
                        NumericDomain::Positive if value <= 0.0 => {
                            return Err(fail(ValidationReason::NotPositive));
                        }
                        _ => {}
                    }
                    Resolved::Number(value)
                }
                FieldKind::Flag { weight } => match raw {
                    InputValue::Flag(set) => Resolved::Flag {
                        set: *set,
                        weight: *weight,
                    },
                    _ => return Err(fail(ValidationReason::NotBoolean)),
                },
            };
            entries.push((field.key.clone(), resolved));
        }
        Ok(Self { entries })
    }

    /// Value of a numeric field. NaN if the key is not a declared numeric
    /// field, which the finiteness check after every formula turns into
    /// [`InstrumentError::NonFiniteResult`](crate::error::InstrumentError).
    pub fn number(&self, key: &str) -> f64 {
        self.entries
            .iter()
            .find_map(|(k, v)| match v {
                Resolved::Number(n) if k == key => Some(*n),
                _ => None,
            })
            .unwrap_or(f64::NAN)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, v)| k == key && matches!(v, Resolved::Flag { set: true, .. }))
    }

    /// Numeric values in declaration order.
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().filter_map(|(_, v)| match v {
            Resolved::Number(n) => Some(*n),
            Resolved::Flag { .. } => None,
        })
    }

    /// Left-to-right sum of all numeric values.
    pub fn sum(&self) -> f64 {
        self.numbers().fold(0.0, |acc, n| acc + n)
    }

    pub fn mean(&self) -> f64 {
        let count = self.numbers().count();
        if count == 0 {
            return f64::NAN;
        }
        self.sum() / count as f64
    }

    /// Sum of the weights of every flag that is set.
    pub fn flag_points(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, v)| match v {
                Resolved::Flag { set: true, weight } => f64::from(*weight),
                _ => 0.0,
            })
            .sum()
    }
}

/// A computed score together with the input it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score {
    pub instrument: InstrumentCode,
    pub value: f64,
    pub scale: ScoreScale,
    pub input: InstrumentInput,
}

impl Score {
    pub fn interpretation(&self) -> Interpretation {
        crate::interpret(self.instrument, self.value)
    }
}
