//! Views over a patient's score history.
//!
//! All functions accept records in any order. Ordering is by `created_at`,
//! with the record id breaking ties so equal timestamps always sort the
//! same way.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use reumacal_instruments::InstrumentCode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::score_record::ScoreRecord;

/// One point of a score series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeriesPoint {
    pub created_at: jiff::Timestamp,
    pub total_score: f64,
}

fn newer(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

pub fn newest_first(mut records: Vec<ScoreRecord>) -> Vec<ScoreRecord> {
    records.sort_by(newer);
    records
}

/// Records of one instrument, in the order given.
pub fn filter_by_instrument(records: &[ScoreRecord], instrument: InstrumentCode) -> Vec<&ScoreRecord> {
    records
        .iter()
        .filter(|r| r.instrument == instrument)
        .collect()
}

/// Most recent record of every instrument that has one.
pub fn latest_by_instrument(records: &[ScoreRecord]) -> BTreeMap<InstrumentCode, &ScoreRecord> {
    let mut latest: BTreeMap<InstrumentCode, &ScoreRecord> = BTreeMap::new();
    for record in records {
        latest
            .entry(record.instrument)
            .and_modify(|current| {
                if newer(record, current) == Ordering::Less {
                    *current = record;
                }
            })
            .or_insert(record);
    }
    latest
}

/// Totals of one instrument in chronological order.
pub fn oldest_first_series(records: &[ScoreRecord], instrument: InstrumentCode) -> Vec<SeriesPoint> {
    let mut matching = filter_by_instrument(records, instrument);
    matching.sort_by(|a, b| newer(b, a));
    matching
        .into_iter()
        .map(|r| SeriesPoint {
            created_at: r.created_at,
            total_score: r.total_score,
        })
        .collect()
}
