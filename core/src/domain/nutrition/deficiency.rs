use crate::domain::nutrition::{
    entities::{Gender, NutrientTotals, TrackedNutrient, UserProfile},
    report::format_amount,
    value_objects::DeficiencyReport,
};

/// A category is deficient when its total falls below this share of the
/// adjusted daily baseline.
const DEFICIENCY_THRESHOLD: f64 = 0.6;

const UNDERWEIGHT_BMI: f64 = 18.5;
const OVERWEIGHT_BMI: f64 = 25.0;

/// Daily baseline target in canonical milligrams, before BMI adjustment.
/// Iron is the one gender-specific target.
fn baseline_mg(nutrient: TrackedNutrient, gender: Gender) -> f64 {
    match nutrient {
        TrackedNutrient::Protein => 50_000.0,
        TrackedNutrient::Fiber => 30_000.0,
        TrackedNutrient::VitaminC => 90.0,
        TrackedNutrient::Iron => {
            if gender == Gender::Female {
                18.0
            } else {
                8.0
            }
        }
        TrackedNutrient::Calcium => 1000.0,
    }
}

/// Baseline multiplier for the BMI bracket. Boundaries are exclusive, the
/// brackets mutually so: exactly 18.5 or 25 means no adjustment.
fn bmi_multiplier(bmi: f64) -> f64 {
    if bmi > 0.0 && bmi < UNDERWEIGHT_BMI {
        1.10
    } else if bmi > OVERWEIGHT_BMI {
        0.90
    } else {
        1.0
    }
}

/// Compares accumulated totals against BMI-adjusted baselines and reports the
/// shortfall for every category below threshold. Sufficient categories are
/// omitted entirely.
pub fn evaluate(totals: &NutrientTotals, profile: &UserProfile) -> DeficiencyReport {
    let multiplier = bmi_multiplier(profile.bmi());
    let mut report = DeficiencyReport::new();
    for nutrient in TrackedNutrient::ALL {
        let baseline = baseline_mg(nutrient, profile.gender) * multiplier;
        let total = totals.get(nutrient);
        if total < baseline * DEFICIENCY_THRESHOLD {
            report.insert(nutrient, format_amount(nutrient, baseline - total));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn female_no_bmi() -> UserProfile {
        UserProfile {
            gender: Gender::Female,
            height_cm: 0.0,
            weight_kg: 0.0,
        }
    }

    #[test]
    fn empty_totals_flag_all_five_categories() {
        let report = evaluate(&NutrientTotals::new(), &female_no_bmi());
        assert_eq!(report.len(), 5);
        assert_eq!(report[&TrackedNutrient::Protein], "50.0 g");
        assert_eq!(report[&TrackedNutrient::Fiber], "30.0 g");
        assert_eq!(report[&TrackedNutrient::VitaminC], "90.0 mg");
        assert_eq!(report[&TrackedNutrient::Iron], "18.0 mg");
        assert_eq!(report[&TrackedNutrient::Calcium], "1000.0 mg");
    }

    #[test]
    fn male_iron_baseline_is_lower() {
        let profile = UserProfile::default();
        let report = evaluate(&NutrientTotals::new(), &profile);
        assert_eq!(report[&TrackedNutrient::Iron], "8.0 mg");
    }

    #[test]
    fn sufficient_categories_are_omitted() {
        let mut totals = NutrientTotals::new();
        // 60% of 1000 mg: meeting the threshold exactly is sufficient.
        totals.add(TrackedNutrient::Calcium, 600.0);
        let report = evaluate(&totals, &UserProfile::default());
        assert!(!report.contains_key(&TrackedNutrient::Calcium));
        assert!(report.contains_key(&TrackedNutrient::Protein));
    }

    #[test]
    fn shortfall_subtracts_the_partial_total() {
        let mut totals = NutrientTotals::new();
        totals.add(TrackedNutrient::VitaminC, 30.0);
        let report = evaluate(&totals, &UserProfile::default());
        assert_eq!(report[&TrackedNutrient::VitaminC], "60.0 mg");
    }

    #[test]
    fn underweight_raises_targets() {
        // BMI = 50 / 1.7² ≈ 17.3 → underweight bracket.
        let profile = UserProfile {
            gender: Gender::Female,
            height_cm: 170.0,
            weight_kg: 50.0,
        };
        let report = evaluate(&NutrientTotals::new(), &profile);
        assert_eq!(report[&TrackedNutrient::Protein], "55.0 g");
        assert_eq!(report[&TrackedNutrient::Iron], "19.8 mg");
    }

    #[test]
    fn overweight_lowers_targets() {
        // BMI = 90 / 1.7² ≈ 31.1 → overweight bracket.
        let profile = UserProfile {
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 90.0,
        };
        let report = evaluate(&NutrientTotals::new(), &profile);
        assert_eq!(report[&TrackedNutrient::Protein], "45.0 g");
        assert_eq!(report[&TrackedNutrient::VitaminC], "81.0 mg");
    }

    #[test]
    fn bmi_boundaries_are_exclusive() {
        // Height 200 cm → BMI = weight / 4.
        let at_underweight_limit = UserProfile {
            gender: Gender::Male,
            height_cm: 200.0,
            weight_kg: 74.0, // BMI exactly 18.5
        };
        let report = evaluate(&NutrientTotals::new(), &at_underweight_limit);
        assert_eq!(report[&TrackedNutrient::Protein], "50.0 g");

        let at_overweight_limit = UserProfile {
            gender: Gender::Male,
            height_cm: 200.0,
            weight_kg: 100.0, // BMI exactly 25
        };
        let report = evaluate(&NutrientTotals::new(), &at_overweight_limit);
        assert_eq!(report[&TrackedNutrient::Protein], "50.0 g");
    }
}
