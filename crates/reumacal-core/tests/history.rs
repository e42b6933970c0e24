use jiff::{Timestamp, ToSpan};
use reumacal_core::history::{
    filter_by_instrument, latest_by_instrument, newest_first, oldest_first_series,
};
use reumacal_core::{NewScoreRecord, PatientId, ScoreRecord};
use reumacal_instruments::{InstrumentCode, InstrumentInput};
use uuid::Uuid;

fn record(instrument: InstrumentCode, total_score: f64, minutes: i64) -> ScoreRecord {
    let base: Timestamp = "2026-03-01T09:00:00Z".parse().unwrap();
    NewScoreRecord {
        patient_id: PatientId::new(Uuid::nil()),
        instrument,
        total_score,
        components: InstrumentInput::new(),
    }
    .into_record(Uuid::new_v4(), base.checked_add(minutes.minutes()).unwrap())
}

fn sample() -> Vec<ScoreRecord> {
    vec![
        record(InstrumentCode::Basdai, 5.0, 0),
        record(InstrumentCode::Das28Crp, 3.36, 10),
        record(InstrumentCode::Basdai, 3.1, 30),
        record(InstrumentCode::Sledai, 8.0, 20),
        record(InstrumentCode::Basdai, 4.2, 15),
    ]
}

#[test]
fn newest_first_orders_by_timestamp_descending() {
    let ordered = newest_first(sample());
    let totals: Vec<f64> = ordered.iter().map(|r| r.total_score).collect();
    assert_eq!(totals, vec![3.1, 8.0, 4.2, 3.36, 5.0]);
}

#[test]
fn newest_first_is_stable_for_equal_timestamps() {
    let a = record(InstrumentCode::Basdai, 1.0, 5);
    let mut b = record(InstrumentCode::Basdai, 2.0, 5);
    b.created_at = a.created_at;

    let one = newest_first(vec![a.clone(), b.clone()]);
    let two = newest_first(vec![b, a]);
    assert_eq!(one, two);
}

#[test]
fn filter_keeps_only_matching_instrument() {
    let records = sample();
    let basdai = filter_by_instrument(&records, InstrumentCode::Basdai);
    assert_eq!(basdai.len(), 3);
    assert!(basdai.iter().all(|r| r.instrument == InstrumentCode::Basdai));
    assert!(filter_by_instrument(&records, InstrumentCode::Facit).is_empty());
}

#[test]
fn latest_per_instrument_picks_most_recent() {
    let records = sample();
    let latest = latest_by_instrument(&records);

    assert_eq!(latest.len(), 3);
    assert_eq!(latest[&InstrumentCode::Basdai].total_score, 3.1);
    assert_eq!(latest[&InstrumentCode::Das28Crp].total_score, 3.36);
    assert_eq!(latest[&InstrumentCode::Sledai].total_score, 8.0);
}

#[test]
fn series_runs_oldest_to_newest() {
    let records = sample();
    let series = oldest_first_series(&records, InstrumentCode::Basdai);
    let totals: Vec<f64> = series.iter().map(|p| p.total_score).collect();
    assert_eq!(totals, vec![5.0, 4.2, 3.1]);
    assert!(series.windows(2).all(|w| w[0].created_at <= w[1].created_at));
}

#[test]
fn empty_history_yields_empty_views() {
    assert!(newest_first(Vec::new()).is_empty());
    assert!(latest_by_instrument(&[]).is_empty());
    assert!(oldest_first_series(&[], InstrumentCode::Esspri).is_empty());
}
