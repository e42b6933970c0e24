use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, LIME, RED};
use crate::scoring::{Field, Section, ScoreRange, Values};
use crate::Instrument;

/// DAPSA: Disease Activity in Psoriatic Arthritis. Plain sum of pain,
/// patient global, 68/66 joint counts and CRP in mg/dL.
pub struct Dapsa;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::AtMost(4.0), Tier::Remission, "Remission", GREEN),
        Band::new(Bound::AtMost(14.0), Tier::Low, "Low disease activity", LIME),
        Band::new(Bound::AtMost(28.0), Tier::Moderate, "Moderate disease activity", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::High, "High disease activity", RED),
};

impl Instrument for Dapsa {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Dapsa
    }

    fn description(&self) -> &str {
        "Disease Activity in Psoriatic Arthritis"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let vas = ScoreRange::new(0.0, 10.0, Some(0.1));
            vec![
                Section::new(
                    "patient_reported",
                    "Patient-Reported Items",
                    vec![
                        Field::number("pain", "Pain (VAS)", vas, 5.0),
                        Field::number("global", "Patient global assessment", vas, 5.0),
                    ],
                ),
                Section::new(
                    "joint_counts",
                    "Joint Counts",
                    vec![
                        Field::number("tjc", "Tender joint count (68)", ScoreRange::new(0.0, 68.0, Some(1.0)), 0.0),
                        Field::number("sjc", "Swollen joint count (66)", ScoreRange::new(0.0, 66.0, Some(1.0)), 0.0),
                    ],
                ),
                Section::new(
                    "laboratory",
                    "Laboratory",
                    vec![
                        Field::number("crp", "C-reactive protein", ScoreRange::new(0.0, 200.0, Some(0.1)), 1.0)
                            .with_unit("mg/dL"),
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
        v.number("pain") + v.number("global") + v.number("tjc") + v.number("sjc") + v.number("crp")
    }
}
