use reumacal_core::{s3_keys, CoreError, InterpretedRecord, NewScoreRecord, PatientId, ScoreRecord};
use reumacal_instruments::{score, InstrumentCode, InstrumentInput, Tier};
use uuid::Uuid;

fn patient() -> PatientId {
    "7c9e6679-7425-40de-944b-e07fc1f90ae7".parse().unwrap()
}

fn basdai(value: f64) -> InstrumentInput {
    (1..=6).map(|i| (format!("q{i}"), value)).collect()
}

#[test]
fn record_from_score_is_consistent() {
    let computed = score(InstrumentCode::Basdai, basdai(5.0)).unwrap();
    let record = ScoreRecord::from_score(patient(), computed, jiff::Timestamp::now());

    assert_eq!(record.total_score, 5.0);
    assert_eq!(record.instrument, InstrumentCode::Basdai);
    assert!(record.is_consistent());
    assert_eq!(record.interpretation().tier, Tier::High);
}

#[test]
fn tampered_total_is_inconsistent() {
    let computed = score(InstrumentCode::Basdai, basdai(5.0)).unwrap();
    let mut record = ScoreRecord::from_score(patient(), computed, jiff::Timestamp::now());
    record.total_score = 3.0;
    assert!(!record.is_consistent());
}

#[test]
fn record_with_invalid_snapshot_is_inconsistent() {
    let new = NewScoreRecord {
        patient_id: patient(),
        instrument: InstrumentCode::Basdai,
        total_score: 5.0,
        components: InstrumentInput::new().with("q1", 5.0),
    };
    assert!(new.recompute().is_err());
    let record = new.into_record(Uuid::new_v4(), jiff::Timestamp::now());
    assert!(!record.is_consistent());
}

#[test]
fn json_round_trip_keeps_snapshot_and_codes() {
    let components = InstrumentInput::new()
        .with("tjc28", 4.0)
        .with("sjc28", "4")
        .with("global", 50.0)
        .with("crp", 5.0)
        .with("variant", "CRP");
    let computed = score(InstrumentCode::Das28Crp, components).unwrap();
    let record = ScoreRecord::from_score(patient(), computed, jiff::Timestamp::now());

    let bytes = record.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["instrument"], "DAS28_CRP");
    assert_eq!(value["total_score"], 3.36);
    assert_eq!(value["components"]["sjc28"], "4");
    assert_eq!(value["patient_id"], "7c9e6679-7425-40de-944b-e07fc1f90ae7");

    let back = ScoreRecord::from_json(&bytes).unwrap();
    assert_eq!(back, record);
    assert!(back.is_consistent());
}

#[test]
fn corrupt_json_is_a_serialization_error() {
    let err = ScoreRecord::from_json(b"{\"id\": 1}").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn interpreted_record_flattens_record_fields() {
    let computed = score(InstrumentCode::Basdai, basdai(3.0)).unwrap();
    let record = ScoreRecord::from_score(patient(), computed, jiff::Timestamp::now());
    let interpreted = InterpretedRecord::from(record.clone());

    let value = serde_json::to_value(&interpreted).unwrap();
    assert_eq!(value["id"], record.id.to_string());
    assert_eq!(value["total_score"], 3.0);
    assert_eq!(value["interpretation"]["tier"], "low");
    assert_eq!(value["interpretation"]["color"], "#10b981");
}

#[test]
fn patient_id_parsing() {
    assert_eq!(
        " 7c9e6679-7425-40de-944b-e07fc1f90ae7 ".parse::<PatientId>().unwrap(),
        patient()
    );
    assert!(matches!(
        "".parse::<PatientId>(),
        Err(CoreError::MissingField(field)) if field == "patient_id"
    ));
    assert!(matches!(
        "../other".parse::<PatientId>(),
        Err(CoreError::InvalidUuid(_))
    ));
}

#[test]
fn keys_nest_records_under_patient_prefix() {
    let id: Uuid = "936da01f-9abd-4d9d-80c7-02af85c822a8".parse().unwrap();
    let prefix = s3_keys::patient_scores_prefix(&patient());
    let key = s3_keys::score_record(&patient(), id);

    assert_eq!(prefix, "scores/7c9e6679-7425-40de-944b-e07fc1f90ae7/");
    assert_eq!(
        key,
        "scores/7c9e6679-7425-40de-944b-e07fc1f90ae7/936da01f-9abd-4d9d-80c7-02af85c822a8.json"
    );
    assert!(key.starts_with(&prefix));
    assert!(prefix.starts_with(s3_keys::SCORES_PREFIX));
}
