use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const GREEN: &str = "#10b981";
pub const LIME: &str = "#84cc16";
pub const AMBER: &str = "#f59e0b";
pub const RED: &str = "#ef4444";
pub const DARK_RED: &str = "#dc2626";

/// Severity or quality-of-life category a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    Inactive,
    Remission,
    Acceptable,
    Excellent,
    Good,
    Low,
    Mild,
    Moderate,
    High,
    VeryHigh,
    Severe,
    Significant,
    Poor,
}

/// Comparison a score must satisfy to fall into a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Bound {
    /// `score < x`
    Below(f64),
    /// `score <= x`
    AtMost(f64),
    /// `score >= x`
    AtLeast(f64),
    /// `score == x`
    Exactly(f64),
    Otherwise,
}

impl Bound {
    pub fn admits(self, score: f64) -> bool {
        match self {
            Bound::Below(x) => score < x,
            Bound::AtMost(x) => score <= x,
            Bound::AtLeast(x) => score >= x,
            Bound::Exactly(x) => score == x,
            Bound::Otherwise => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Band {
    pub bound: Bound,
    pub tier: Tier,
    pub label: &'static str,
    pub color: &'static str,
}

impl Band {
    pub const fn new(bound: Bound, tier: Tier, label: &'static str, color: &'static str) -> Self {
        Self {
            bound,
            tier,
            label,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub label: String,
    pub tier: Tier,
    pub color: String,
}

impl From<&Band> for Interpretation {
    fn from(band: &Band) -> Self {
        Self {
            label: band.label.to_string(),
            tier: band.tier,
            color: band.color.to_string(),
        }
    }
}

/// Ordered bands plus the catch-all band for scores no bound admits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandTable {
    pub bands: &'static [Band],
    pub otherwise: Band,
}

impl BandTable {
    /// First band whose bound admits `score`, tested in table order.
    ///
    /// `score` must be finite. NaN admits no bound and lands in the
    /// catch-all band; `compute` never produces it.
    pub fn classify(&self, score: f64) -> Interpretation {
        self.bands
            .iter()
            .find(|band| band.bound.admits(score))
            .unwrap_or(&self.otherwise)
            .into()
    }

    /// All bands, catch-all last.
    pub fn iter(&self) -> impl Iterator<Item = &Band> {
        self.bands.iter().chain(std::iter::once(&self.otherwise))
    }
}
