use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, LIME, RED};
use crate::scoring::{Field, Section, ScoreRange, Values};
use crate::Instrument;

/// SF-36 Health Survey, summarized as the mean of its eight 0–100
/// dimension scores. Higher is better.
pub struct Sf36;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::AtLeast(75.0), Tier::Excellent, "Very good quality of life", GREEN),
        Band::new(Bound::AtLeast(50.0), Tier::Good, "Good quality of life", LIME),
        Band::new(Bound::AtLeast(25.0), Tier::Moderate, "Moderate quality of life", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::Poor, "Impaired quality of life", RED),
};

impl Instrument for Sf36 {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Sf36
    }

    fn description(&self) -> &str {
        "Short Form 36 Health Survey"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let dimension_range = ScoreRange::new(0.0, 100.0, Some(5.0));
            let dimension = |key, label| Field::number(key, label, dimension_range, 50.0);
            vec![
                Section::new(
                    "physical",
                    "Physical Health",
                    vec![
                        dimension("physicalFunctioning", "Physical functioning"),
                        dimension("rolePhysical", "Role limitations (physical)"),
                        dimension("bodilyPain", "Bodily pain"),
                        dimension("generalHealth", "General health"),
                    ],
                )
                .with_description("0 = worst, 100 = best"),
                Section::new(
                    "mental",
                    "Mental Health",
                    vec![
                        dimension("vitality", "Vitality"),
                        dimension("socialFunctioning", "Social functioning"),
                        dimension("roleEmotional", "Role limitations (emotional)"),
                        dimension("mentalHealth", "Mental health"),
                    ],
                ),
            ]
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
