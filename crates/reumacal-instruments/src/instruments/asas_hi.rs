use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, RED};
use crate::scoring::{Section, ScoreScale, Values};
use crate::Instrument;

use super::counted_flags;

/// ASAS-HI: ASAS Health Index. One point per activity the patient finds
/// difficult, 0–17.
pub struct AsasHi;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::AtMost(5.0), Tier::Low, "Low impact", GREEN),
        Band::new(Bound::AtMost(11.0), Tier::Moderate, "Moderate impact", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::High, "High impact", RED),
};

impl Instrument for AsasHi {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::AsasHi
    }

    fn description(&self) -> &str {
        "ASAS Health Index"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![Section::new(
                "difficulties",
                "Difficulties",
                counted_flags(&[
                    "Pain",
                    "Feeling depressed",
                    "Motivation to do anything",
                    "Coping with unexpected situations",
                    "Taking part in leisure activities",
                    "Squatting",
                    "Standing for a long time",
                    "Walking on uneven ground",
                    "Climbing stairs",
                    "Getting up from a chair without using hands",
                    "Standing up",
                    "Reaching high objects",
                    "Bending down",
                    "Using public transport",
                    "Driving a car",
                    "Washing the body",
                    "Getting dressed",
                ]),
            )
            .with_description("Mark the activities you have difficulty with")]
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
