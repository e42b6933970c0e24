use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, RED};
use crate::scoring::{Section, ScoreScale, Values};
use crate::Instrument;

use super::counted_flags;

/// PsAQoL: Psoriatic Arthritis Quality of Life. 20 statements, one point each.
pub struct PsaQol;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::AtMost(7.0), Tier::Good, "Good quality of life", GREEN),
        Band::new(Bound::AtMost(14.0), Tier::Moderate, "Moderate quality of life", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::Poor, "Impaired quality of life", RED),
};

impl Instrument for PsaQol {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::PsaQol
    }

    fn description(&self) -> &str {
        "Psoriatic Arthritis Quality of Life"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section::new(
                "statements",
                "Statements",
                counted_flags(&[
                    "I feel my arthritis controls my life",
                    "I find it hard to do things on the spur of the moment",
                    "I feel frustrated",
                    "I feel tired most of the time",
                    "My arthritis affects my confidence",
                    "I find it hard to go out",
                    "I feel I am a burden to others",
                    "I feel weak",
                    "I have difficulty getting dressed",
                    "I can't do what I want to do",
                    "I feel anxious",
                    "Pain makes it hard to sleep",
                    "Stiffness is a major problem",
                    "I find it hard to make plans",
                    "I avoid social situations",
                    "I feel isolated",
                    "I need help with daily activities",
                    "I find it hard to concentrate",
                    "I worry about my appearance",
                    "I find it hard to keep up relationships",
                ]),
            )
            .with_description("Mark the statements that apply to you")]
        });
        &SECTIONS
    }

    fn scale(&self) -> ScoreScale {
        ScoreScale::Integer
    }

    fn bands(&self) -> &BandTable {
        &BANDS
    }

    fn formula(&self, v: &Values) -> f64 {
        v.flag_points()
    }
}
