use std::collections::BTreeMap;

use crate::domain::nutrition::entities::{NutrientTotals, TrackedNutrient};

/// Rounds to two decimals (half away from zero) and trims trailing zeros,
/// keeping at least one decimal digit: 18 -> "18.0", 12.345 -> "12.35".
/// Every human-readable amount in the system goes through this.
pub fn format_rounded(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

/// Renders a canonical-milligram amount in the category's display unit.
pub fn format_amount(nutrient: TrackedNutrient, amount_mg: f64) -> String {
    if nutrient.is_gram_family() {
        format!("{} g", format_rounded(amount_mg / 1000.0))
    } else {
        format!("{} mg", format_rounded(amount_mg))
    }
}

/// Converts accumulated totals into human-readable display strings.
pub fn format_totals(totals: &NutrientTotals) -> BTreeMap<TrackedNutrient, String> {
    totals
        .iter()
        .map(|(nutrient, total_mg)| (nutrient, format_amount(nutrient, total_mg)))
        .collect()
}
