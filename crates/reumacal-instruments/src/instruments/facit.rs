use crate::code::InstrumentCode;
use crate::interpretation::{Band, BandTable, Bound, Tier, AMBER, GREEN, LIME, RED};
use crate::scoring::{Section, ScoreRange, Values};
use crate::Instrument;

use super::numbered_items;

/// FACIT-G: Functional Assessment of Chronic Illness Therapy, general form.
/// 27 items rated 0–4, summed to 0–108. Higher is better.
pub struct Facit;

const BANDS: BandTable = BandTable {
    bands: &[
        Band::new(Bound::AtLeast(80.0), Tier::Excellent, "Very good quality of life", GREEN),
        Band::new(Bound::AtLeast(60.0), Tier::Good, "Good quality of life", LIME),
        Band::new(Bound::AtLeast(40.0), Tier::Moderate, "Moderate quality of life", AMBER),
    ],
    otherwise: Band::new(Bound::Otherwise, Tier::Poor, "Impaired quality of life", RED),
};

impl Instrument for Facit {
    fn code(&self) -> InstrumentCode {
        InstrumentCode::Facit
    }

    fn description(&self) -> &str {
        "Functional Assessment of Chronic Illness Therapy - General"
    }

    fn sections(&self) -> &[Section] {
        static SECTIONS: std::sync::LazyLock<Vec<Section>> = std::sync::LazyLock::new(|| {
            let rating = ScoreRange::new(0.0, 4.0, Some(0.5));
            vec![
                Section::new(
                    "physical",
                    "Physical Well-Being",
                    numbered_items(
                        1,
                        &[
                            "I have a lack of energy",
                            "I have nausea",
                            "Because of my physical condition, I have trouble meeting the needs of my family",
                            "I have pain",
                            "I am bothered by side effects of treatment",
                            "I feel ill",
                            "I am forced to spend time in bed",
                        ],
                        rating,
                        2.0,
                    ),
                )
                .with_description("0 = not at all, 1 = a little bit, 2 = somewhat, 3 = quite a bit, 4 = very much"),
                Section::new(
                    "social",
                    "Social/Family Well-Being",
                    numbered_items(
                        8,
                        &[
                            "I feel close to my friends",
                            "I get emotional support from my family",
                            "I get support from my friends",
                            "My family has accepted my illness",
                            "I am satisfied with family communication about my illness",
                            "I feel close to my partner (or the person who is my main support)",
                        ],
                        rating,
                        2.0,
                    ),
                ),
                Section::new(
                    "emotional",
                    "Emotional Well-Being",
                    numbered_items(
                        14,
                        &[
                            "I feel sad",
                            "I am satisfied with how I am coping with my illness",
                            "I am losing hope in the fight against my illness",
                            "I feel nervous",
                            "I worry about dying",
                            "I worry that my condition will get worse",
                        ],
                        rating,
                        2.0,
                    ),
                ),
                Section::new(
                    "functional",
                    "Functional Well-Being",
                    numbered_items(
                        20,
                        &[
                            "I am able to enjoy life",
                            "I am sleeping well",
                            "I am enjoying the things I usually do for fun",
                            "I am content with the quality of my life right now",
                            "I am able to work (include work at home)",
                            "My work (include work at home) is fulfilling",
                            "I can enjoy life",
                            "I have accepted my illness",
                        ],
                        rating,
                        2.0,
                    ),
                ),
            ]
        });
        &SECTIONS
    }

    fn bands(&self) -> &BandTable {
        &BANDS
    }

    fn formula(&self, v: &Values) -> f64 {
        v.sum()
    }
}
