use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::{Extension, Json};
use serde::Serialize;

use reumacal_audit::{AuditAction, AuditEvent};
use reumacal_instruments::interpretation::Band;
use reumacal_instruments::scoring::{RangeViolation, Section};
use reumacal_instruments::{
    all_instruments, InstrumentCode, InstrumentInput, Interpretation, ScoreScale,
};

use crate::error::ApiError;
use crate::middleware::actor::Actor;

#[derive(Serialize)]
pub struct InstrumentSummary {
    code: InstrumentCode,
    name: String,
    description: String,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    code: InstrumentCode,
    name: String,
    description: String,
    scale: ScoreScale,
    max_score: Option<f64>,
    sections: Vec<Section>,
    bands: Vec<Band>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    instrument: InstrumentCode,
    score: f64,
    scale: ScoreScale,
    interpretation: Interpretation,
    /// Values outside their published range. Advisory; the score is still
    /// computed.
    warnings: Vec<RangeViolation>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            code: i.code(),
            name: i.name().to_string(),
            description: i.description().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(code): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = code.parse::<InstrumentCode>()?.instrument();

    Ok(Json(InstrumentDetail {
        code: instrument.code(),
        name: instrument.name().to_string(),
        description: instrument.description().to_string(),
        scale: instrument.scale(),
        max_score: instrument.max_score(),
        sections: instrument.sections().to_vec(),
        bands: instrument.bands().iter().copied().collect(),
    }))
}

/// Compute a score without saving it.
pub async fn compute_score(
    Path(code): Path<String>,
    Extension(actor): Extension<Actor>,
    payload: Result<Json<InstrumentInput>, JsonRejection>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let code = code.parse::<InstrumentCode>()?;
    let Json(input) = payload?;
    let instrument = code.instrument();

    let warnings = instrument.out_of_range(&input);
    let score = instrument.compute(&input)?;

    AuditEvent::new(AuditAction::ScoreCompute, "instrument", code.as_str(), actor.0).emit();

    Ok(Json(ScoreResponse {
        instrument: code,
        score,
        scale: instrument.scale(),
        interpretation: instrument.interpret(score),
        warnings,
    }))
}
