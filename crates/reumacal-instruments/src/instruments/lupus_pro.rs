use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, LIME, RED};
use crate::scoring::{Field, Section, ScoreRange, Values};
use crate::Instrument;

/// LupusPRO v1.8. Eleven domains rated 0–4, averaged and rescaled to 0–100.
/// Lower is better.
pub struct LupusPro;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::AtMost(25.0), Tier::Excellent, "Very good quality of life", GREEN),
        Band::new(Bound::AtMost(50.0), Tier::Good, "Good quality of life", LIME),
        Band::new(Bound::AtMost(75.0), Tier::Moderate, "Moderate quality of life", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::Poor, "Impaired quality of life", RED),
};

impl Instrument for LupusPro {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::LupusPro
    }

    fn description(&self) -> &str {
        "Lupus Patient-Reported Outcome"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let rating = ScoreRange::new(0.0, 4.0, Some(0.5));
            let domain = |key, label| Field::number(key, label, rating, 2.0);
            vec![
                Section::new(
                    "health_related",
                    "Health-Related Quality of Life",
                    vec![
                        domain("lupusSymptoms", "Lupus symptoms"),
                        domain("lupusMedications", "Lupus medications"),
                        domain("procreation", "Procreation"),
                        domain("physicalHealth", "Physical health"),
                        domain("painVitality", "Pain and vitality"),
                        domain("emotionalHealth", "Emotional health"),
                        domain("bodyImage", "Body image"),
                        domain("cognition", "Cognition"),
                    ],
                )
                .with_description("0 = never, 1 = rarely, 2 = sometimes, 3 = often, 4 = always"),
                Section::new(
                    "non_health_related",
                    "Non-Health-Related Quality of Life",
                    vec![
                        domain("desires", "Desires and goals"),
                        domain("coping", "Coping"),
                        domain("satisfaction", "Satisfaction with medical care"),
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
        v.mean() * 25.0
    }
}
