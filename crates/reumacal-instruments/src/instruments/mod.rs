pub mod asas_hi;
pub mod asdas;
pub mod asqol;
pub mod basdai;
pub mod basfi;
pub mod dapsa;
pub mod das28;
pub mod esspri;
pub mod facit;
pub mod lupus_pro;
pub mod psaqol;
pub mod sf36;
pub mod sledai;
pub mod ssdai;

use crate::scoring::{Field, ScoreRange};

/// Numeric items keyed `q{first}`, `q{first + 1}`, ... in label order.
fn numbered_items(first: usize, labels: &[&str], range: ScoreRange, default_value: f64) -> Vec<Field> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Field::number(&format!("q{}", first + i), label, range, default_value))
        .collect()
}

/// Yes/no items worth one point each, keyed `q1`, `q2`, ...
fn counted_flags(labels: &[&str]) -> Vec<Field> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Field::flag(&format!("q{}", i + 1), label, 1))
        .collect()
}
