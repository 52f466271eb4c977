use crate::domain::nutrition::{
    entities::{NutrientSample, NutrientTotals, TrackedNutrient},
    units::to_milligrams,
};

/// Folds one food portion's nutrient samples into the running totals.
///
/// Provider values are defined per 100 g of food, so each sample amount is
/// scaled by `quantity_g / 100`. Samples whose names match no tracked
/// category are dropped. Non-positive quantities contribute nothing.
pub fn apply_portion(totals: &mut NutrientTotals, quantity_g: f64, samples: &[NutrientSample]) {
    if quantity_g <= 0.0 {
        return;
    }
    let scale = quantity_g / 100.0;
    for sample in samples {
        let Some(nutrient) = TrackedNutrient::from_raw_name(&sample.name) else {
            continue;
        };
        let scaled = sample.amount * scale;
        totals.add(nutrient, to_milligrams(scaled, &sample.unit));
    }
}
