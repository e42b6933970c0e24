use crate::code::{InstrumentCode, LabMarker};
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, LIME, RED};
use crate::scoring::{Field, NumericDomain, Section, ScoreRange, Values};
use crate::Instrument;

/// ASDAS: Ankylosing Spondylitis Disease Activity Score, with either CRP
/// (mg/L) or ESR (mm/h) as the inflammatory marker.
pub struct Asdas(pub LabMarker);

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::Below(1.3), Tier::Inactive, "Inactive disease", GREEN),
        Band::new(Bound::Below(2.1), Tier::Low, "Low disease activity", LIME),
        Band::new(Bound::Below(3.5), Tier::High, "High disease activity", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::VeryHigh, "Very high disease activity", RED),
};

fn patient_section() -> Section {
    let rating = ScoreRange::new(0.0, 10.0, Some(0.1));
    Section::new(
        "patient_reported",
        "Patient-Reported Items",
        vec![
            Field::number("backPain", "Back pain", rating, 5.0),
            Field::number("duration", "Duration of morning stiffness", rating, 5.0),
            Field::number("peripheral", "Peripheral pain or swelling", rating, 5.0)
                .with_domain(NumericDomain::NonNegative),
            Field::number("global", "Patient global assessment", rating, 5.0),
        ],
    )
}

impl Instrument for Asdas {
    fn code(&self) -> InstrumentCode {
        match self.0 {
            LabMarker::Crp => InstrumentCode::AsdasCrp,
            LabMarker::Esr => InstrumentCode::AsdasEsr,
        }
    }

    fn description(&self) -> &str {
        "Ankylosing Spondylitis Disease Activity Score"
    }

    fn sections(&self) -> &[Section] {
        static CRP: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                patient_section(),
                Section::new(
                    "laboratory",
                    "Laboratory",
                    vec![
                        Field::number("crp", "C-reactive protein", ScoreRange::new(0.0, 200.0, Some(0.1)), 5.0)
                            .with_domain(NumericDomain::NonNegative)
                            .with_unit("mg/L"),
                    ],
                ),
            ]
        });
        static ESR: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                patient_section(),
                Section::new(
                    "laboratory",
                    "Laboratory",
                    vec![
                        Field::number("esr", "Erythrocyte sedimentation rate", ScoreRange::new(0.0, 150.0, Some(1.0)), 20.0)
                            .with_domain(NumericDomain::NonNegative)
                            .with_unit("mm/h"),
                    ],
                ),
            ]
        });
        match self.0 {
            LabMarker::Crp => &CRP,
            LabMarker::Esr => &ESR,
        }
    }

    fn bands(&self) -> &BandTable {
        &BANDS
    }

    fn formula(&self, v: &Values) -> f64 {
        let back_pain = v.number("backPain");
        let duration = v.number("duration");
        let peripheral = v.number("peripheral");
        let global = v.number("global");
        match self.0 {
            LabMarker::Crp => {
                0.121 * back_pain
                    + 0.058 * duration
                    + 0.110 * peripheral.sqrt()
                    + 0.073 * global
                    + 0.579 * (v.number("crp") + 1.0).ln()
            }
            LabMarker::Esr => {
                0.113 * back_pain
                    + 0.053 * duration
                    + 0.123 * peripheral.sqrt()
                    + 0.069 * global
                    + 0.293 * v.number("esr").sqrt()
            }
        }
    }
}
