use crate::code::{InstrumentCode, LabMarker};
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, LIME, RED};
use crate::scoring::{Field, NumericDomain, Section, ScoreRange, Values};
use crate::Instrument;

/// DAS28: Disease Activity Score over 28 joints, CRP (mg/L) or ESR (mm/h).
///
/// The ESR variant takes `ln(esr)` and is only defined for esr > 0.
pub struct Das28(pub LabMarker);

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::Below(2.6), Tier::Remission, "Remission", GREEN),
        Band::new(Bound::Below(3.2), Tier::Low, "Low disease activity", LIME),
        Band::new(Bound::AtMost(5.1), Tier::Moderate, "Moderate disease activity", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::High, "High disease activity", RED),
};

fn clinical_section() -> Section {
    let joints = ScoreRange::new(0.0, 28.0, Some(1.0));
    Section::new(
        "clinical",
        "Clinical Assessment",
        vec![
            Field::number("tjc28", "Tender joint count (28)", joints, 0.0)
                .with_domain(NumericDomain::NonNegative),
            Field::number("sjc28", "Swollen joint count (28)", joints, 0.0)
                .with_domain(NumericDomain::NonNegative),
            Field::number("global", "Patient global assessment", ScoreRange::new(0.0, 100.0, Some(1.0)), 50.0),
        ],
    )
}

impl Instrument for Das28 {
    fn code(&self) -> InstrumentCode {
        match self.0 {
            LabMarker::Crp => InstrumentCode::Das28Crp,
            LabMarker::Esr => InstrumentCode::Das28Esr,
        }
    }

    fn description(&self) -> &str {
        "Disease Activity Score 28"
    }

    fn sections(&self) -> &[Section] {
        static CRP: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                clinical_section(),
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
                clinical_section(),
                Section::new(
                    "laboratory",
                    "Laboratory",
                    vec![
                        Field::number("esr", "Erythrocyte sedimentation rate", ScoreRange::new(0.0, 150.0, Some(1.0)), 20.0)
                            .with_domain(NumericDomain::Positive)
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
        let tender = 0.56 * v.number("tjc28").sqrt();
        let swollen = 0.28 * v.number("sjc28").sqrt();
        match self.0 {
            // Global is entered on 0-100 and scaled to 0-10 for the CRP formula.
            LabMarker::Crp => {
                tender
                    + swollen
                    + 0.36 * (v.number("crp") + 1.0).ln()
                    + 0.014 * (v.number("global") / 10.0)
                    + 0.96
            }
            LabMarker::Esr => tender + swollen + 0.70 * v.number("esr").ln() + 0.014 * v.number("global"),
        }
    }
}
