use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, LIME, RED};
use crate::scoring::{Field, Section, ScoreScale, Values};
use crate::Instrument;

/// SSDAI: Sjögren's Syndrome Disease Activity Index (Vitali 2007).
/// 17 findings weighted 1–9 by organ system.
pub struct Ssdai;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::Exactly(0.0), Tier::Inactive, "Inactive", GREEN),
        Band::new(Bound::AtMost(5.0), Tier::Low, "Low activity", LIME),
        Band::new(Bound::AtMost(13.0), Tier::Moderate, "Moderate activity", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::High, "High activity", RED),
};

impl Instrument for Ssdai {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Ssdai
    }

    fn description(&self) -> &str {
        "Sjögren's Syndrome Disease Activity Index"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section::new(
                    "constitutional",
                    "Constitutional",
                    vec![
                        Field::flag("fever", "Fever", 1),
                        Field::flag("lymphadenopathy", "Lymphadenopathy", 2),
                        Field::flag("lymphadenopathyBiopsy", "Lymphadenopathy (positive biopsy)", 3),
                    ],
                ),
                Section::new(
                    "glandular_articular",
                    "Glandular and Articular",
                    vec![
                        Field::flag("glandularSwelling", "Glandular swelling", 2),
                        Field::flag("arthralgia", "Arthralgia", 2),
                        Field::flag("arthritis", "Arthritis", 4),
                    ],
                ),
                Section::new(
                    "cutaneous",
                    "Cutaneous",
                    vec![
                        Field::flag("vasculitis", "Vasculitis", 3),
                        Field::flag("purpura", "Purpura", 6),
                    ],
                ),
                Section::new(
                    "major_organ",
                    "Major Organ",
                    vec![
                        Field::flag("pulmonary", "Pulmonary involvement", 9),
                        Field::flag("renal", "Renal involvement", 9),
                        Field::flag("myositis", "Myositis", 6),
                        Field::flag("cns", "Central nervous system", 9),
                        Field::flag("pns", "Peripheral nervous system", 9),
                    ],
                ),
                Section::new(
                    "hematological_biological",
                    "Hematological and Biological",
                    vec![
                        Field::flag("leukopenia", "Leukopenia", 1),
                        Field::flag("thrombocytopenia", "Thrombocytopenia", 2),
                        Field::flag("hypergammaglobulinemia", "Hypergammaglobulinemia", 1),
                        Field::flag("hypocomplementemia", "Hypocomplementemia", 2),
                    ],
                ),
            ]
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
