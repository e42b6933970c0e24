use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, DARK_RED, GREEN, LIME, RED};
use crate::scoring::{Field, Section, ScoreScale, Values};
use crate::Instrument;

/// SLEDAI: Systemic Lupus Erythematosus Disease Activity Index.
/// 24 findings, each worth 8, 4, 2 or 1 points when present.
pub struct Sledai;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::Exactly(0.0), Tier::Inactive, "Inactive", GREEN),
        Band::new(Bound::AtMost(5.0), Tier::Mild, "Mild activity", LIME),
        Band::new(Bound::AtMost(10.0), Tier::Moderate, "Moderate activity", AMBER),
        Band::new(Bound::AtMost(19.0), Tier::High, "High activity", RED),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::VeryHigh, "Very high activity", DARK_RED),
};

impl Instrument for Sledai {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Sledai
    }

    fn description(&self) -> &str {
        "Systemic Lupus Erythematosus Disease Activity Index"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            vec![
                Section::new(
                    "nervous_system",
                    "Nervous System",
                    vec![
                        Field::flag("seizure", "Seizure", 8),
                        Field::flag("psychosis", "Psychosis", 8),
                        Field::flag("organicBrainSyndrome", "Organic brain syndrome", 8),
                        Field::flag("visualDisturbance", "Visual disturbance", 8),
                        Field::flag("cranialNerve", "Cranial nerve disorder", 8),
                        Field::flag("lupusHeadache", "Lupus headache", 8),
                        Field::flag("cva", "Cerebrovascular accident", 8),
                    ],
                ),
                Section::new(
                    "vascular_musculoskeletal",
                    "Vascular and Musculoskeletal",
                    vec![
                        Field::flag("vasculitis", "Vasculitis", 8),
                        Field::flag("arthritis", "Arthritis", 4),
                        Field::flag("myositis", "Myositis", 4),
                    ],
                ),
                Section::new(
                    "renal",
                    "Renal",
                    vec![
                        Field::flag("urinaryCasts", "Urinary casts", 4),
                        Field::flag("hematuria", "Hematuria", 4),
                        Field::flag("proteinuria", "Proteinuria", 4),
                        Field::flag("pyuria", "Pyuria", 4),
                    ],
                ),
                Section::new(
                    "serosal_mucocutaneous",
                    "Serositis and Mucocutaneous",
                    vec![
                        Field::flag("pleurisy", "Pleurisy", 4),
                        Field::flag("pericarditis", "Pericarditis", 4),
                        Field::flag("rash", "Rash", 2),
                        Field::flag("alopecia", "Alopecia", 2),
                        Field::flag("mucosalUlcers", "Mucosal ulcers", 2),
                    ],
                ),
                Section::new(
                    "immunological_hematological",
                    "Immunological and Hematological",
                    vec![
                        Field::flag("lowComplement", "Low complement", 2),
                        Field::flag("increasedDnaBind", "Increased DNA binding", 2),
                        Field::flag("fever", "Fever", 1),
                        Field::flag("thrombocytopenia", "Thrombocytopenia", 1),
                        Field::flag("leukopenia", "Leukopenia", 1),
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
