use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, RED};
use crate::scoring::{Section, ScoreRange, Values};
use crate::Instrument;

use super::numbered_items;

/// BASFI: Bath Ankylosing Spondylitis Functional Index. Mean of ten 0–10
/// ratings; higher is worse.
pub struct Basfi;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::Below(4.0), Tier::Good, "Good function", GREEN),
        Band::new(Bound::Below(7.0), Tier::Moderate, "Moderate limitation", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::Severe, "Severe limitation", RED),
};

impl Instrument for Basfi {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Basfi
    }

    fn description(&self) -> &str {
        "Bath Ankylosing Spondylitis Functional Index"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section::new(
                "activities",
                "Activities",
                numbered_items(
                    1,
                    &[
                        "Putting on socks or tights without help",
                        "Bending forward to pick up a pen from the floor",
                        "Reaching up to a high shelf without help",
                        "Getting up from an armless chair",
                        "Getting up off the floor without help",
                        "Standing unsupported for 10 minutes",
                        "Climbing 12-15 steps without a handrail",
                        "Looking over your shoulder",
                        "Doing physically demanding activities",
                        "Doing a full day's activities",
                    ],
                    ScoreRange::new(0.0, 10.0, Some(0.5)),
                    5.0,
                ),
            )
            .with_description("0 = easy, 10 = impossible")]
        });
        &SECTIONS
    }

    fn bands(&self) -> &BandTable {
        &BANDS
    }

    fn formula(&self, v: &Values) -> f64 {
        v.mean()
    }
}
