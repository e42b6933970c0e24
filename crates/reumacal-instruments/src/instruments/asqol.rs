use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, RED};
use crate::scoring::{Section, ScoreScale, Values};
use crate::Instrument;

use super::counted_flags;

/// ASQoL: Ankylosing Spondylitis Quality of Life. 18 statements, one point
/// each; higher is worse.
pub struct AsQol;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::AtMost(6.0), Tier::Good, "Good quality of life", GREEN),
        Band::new(Bound::AtMost(12.0), Tier::Moderate, "Moderate quality of life", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::Poor, "Impaired quality of life", RED),
};

impl Instrument for AsQol {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::AsQol
    }

    fn description(&self) -> &str {
        "Ankylosing Spondylitis Quality of Life"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section::new(
                "statements",
                "Statements",
                counted_flags(&[
                    "My condition controls my life",
                    "I have to rely too much on other people",
                    "I feel frustrated",
                    "I feel tired most of the time",
                    "I feel socially isolated",
                    "My condition affects my social life",
                    "I feel I am a burden to others",
                    "I feel physically weak",
                    "I have difficulty sleeping",
                    "I feel anxious or depressed",
                    "I find it hard to plan ahead",
                    "Stiffness is a problem",
                    "I am frustrated by how slow I am",
                    "I have trouble getting dressed",
                    "I find it hard to take part in physical activities",
                    "I avoid social contact",
                    "I feel irritable",
                    "My condition affects my relationship with my partner",
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
