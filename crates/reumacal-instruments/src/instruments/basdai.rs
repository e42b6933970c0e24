use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, GREEN, RED};
use crate::scoring::{Section, ScoreRange, Values};
use crate::Instrument;

use super::numbered_items;

/// BASDAI: Bath Ankylosing Spondylitis Disease Activity Index.
/// Six 0–10 ratings; the two morning-stiffness items are averaged first.
pub struct Basdai;

const BANDS: BandTable = BandTable {
    bands: &[Band::new(Bound::Below(4.0), Tier::Low, "Low disease activity", GREEN)],
    otherwise: Band::new(Bound::Otherwise, Tier::High, "High disease activity", RED),
};

impl Instrument for Basdai {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Basdai
    }

    fn description(&self) -> &str {
        "Bath Ankylosing Spondylitis Disease Activity Index"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let rating = ScoreRange::new(0.0, 10.0, Some(0.1));
            vec![Section::new(
                "basdai_items",
                "BASDAI Items",
                numbered_items(
                    1,
                    &[
                        "Fatigue or tiredness",
                        "Neck, back or hip pain",
                        "Pain or swelling in other joints",
                        "Discomfort from areas tender to touch or pressure",
                        "Severity of morning stiffness",
                        "Duration of morning stiffness (0-10 maps to 0-2h+)",
                    ],
                    rating,
                    5.0,
                ),
            )
            .with_description("0 = none, 10 = very severe")]
        });
        &SECTIONS
    }

    fn bands(&self) -> &BandTable {
        &BANDS
    }

    fn formula(&self, v: &Values) -> f64 {
        let stiffness = (v.number("q5") + v.number("q6")) / 2.0;
        (v.number("q1") + v.number("q2") + v.number("q3") + v.number("q4") + stiffness) / 5.0
    }
}
