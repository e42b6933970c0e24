use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, GREEN, RED};
use crate::scoring::{Field, Section, ScoreRange, Values};
use crate::Instrument;

/// ESSPRI: EULAR Sjögren's Syndrome Patient Reported Index.
pub struct Esspri;

const BANDS: BandTable = BandTable {
    bands: &[Band::new(Bound::Below(5.0), Tier::Acceptable, "Acceptable symptom state", GREEN)],
    otherwise: Band::new(Bound::Otherwise, Tier::Significant, "Significant symptoms", RED),
};

impl Instrument for Esspri {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Esspri
    }

    fn description(&self) -> &str {
        "EULAR Sjögren's Syndrome Patient Reported Index"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let rating = ScoreRange::new(0.0, 10.0, Some(0.5));
            vec![Section::new(
                "symptoms",
                "Symptoms",
                vec![
                    Field::number("dryness", "Dryness (mouth, eyes, skin)", rating, 5.0),
                    Field::number("fatigue", "Fatigue", rating, 5.0),
                    Field::number("pain", "Pain (joints, muscles)", rating, 5.0),
                ],
            )
            .with_description("0 = absent, 10 = worst imaginable")]
        });
        &SECTIONS
    }

    fn bands(&self) -> &BandTable {
        &BANDS
    }

    fn formula(&self, v: &Values) -> f64 {
        (v.number("dryness") + v.number("fatigue") + v.number("pain")) / 3.0
    }
}
