use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use reumacal_audit::{AuditAction, AuditEvent};
use reumacal_core::history::{filter_by_instrument, latest_by_instrument};
use reumacal_core::{InterpretedRecord, NewScoreRecord, PatientId};
use reumacal_instruments::{score, InstrumentCode, InstrumentInput};
use reumacal_storage::ScoreStore;

use crate::error::ApiError;
use crate::middleware::actor::Actor;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateScoreRequest {
    /// Stored instrument code, e.g. `DAS28_CRP`.
    pub instrument: String,
    pub components: InstrumentInput,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub instrument: Option<String>,
}

/// Compute the score server-side and save it to the patient's history.
pub async fn create_score(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    Extension(actor): Extension<Actor>,
    payload: Result<Json<CreateScoreRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InterpretedRecord>), ApiError> {
    let patient_id: PatientId = patient_id.parse()?;
    let Json(request) = payload?;
    let code = request.instrument.parse::<InstrumentCode>()?;

    let computed = score(code, request.components)?;
    let record = state
        .store
        .create_score_record(NewScoreRecord::from_score(patient_id, computed))
        .await?;

    AuditEvent::new(
        AuditAction::ScoreCreate,
        "score_record",
        record.id.to_string(),
        actor.0,
    )
    .with_details(json!({
        "patient_id": patient_id,
        "instrument": code,
        "total_score": record.total_score,
    }))
    .emit();

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// A patient's history, newest first, optionally for one instrument.
pub async fn list_scores(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    Query(query): Query<HistoryQuery>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<InterpretedRecord>>, ApiError> {
    let patient_id: PatientId = patient_id.parse()?;
    let instrument = query
        .instrument
        .as_deref()
        .map(str::parse::<InstrumentCode>)
        .transpose()?;

    let records = state.store.list_score_records(patient_id).await?;
    let records: Vec<InterpretedRecord> = match instrument {
        Some(code) => filter_by_instrument(&records, code)
            .into_iter()
            .cloned()
            .map(InterpretedRecord::from)
            .collect(),
        None => records.into_iter().map(InterpretedRecord::from).collect(),
    };

    AuditEvent::new(AuditAction::ScoreList, "patient", patient_id.to_string(), actor.0)
        .with_details(json!({
            "instrument": instrument,
            "count": records.len(),
        }))
        .emit();

    Ok(Json(records))
}

/// The most recent record of every instrument the patient has.
pub async fn latest_scores(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<InterpretedRecord>>, ApiError> {
    let patient_id: PatientId = patient_id.parse()?;

    let records = state.store.list_score_records(patient_id).await?;
    let latest: Vec<InterpretedRecord> = latest_by_instrument(&records)
        .into_values()
        .cloned()
        .map(InterpretedRecord::from)
        .collect();

    AuditEvent::new(AuditAction::ScoreList, "patient", patient_id.to_string(), actor.0)
        .with_details(json!({ "view": "latest", "count": latest.len() }))
        .emit();

    Ok(Json(latest))
}
