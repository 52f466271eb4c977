use crate::domain::{
    nutrition::{
        entities::TrackedNutrient,
        value_objects::{DeficiencyReport, Recommendation},
    },
    weather::entities::WeatherReport,
};

pub const MAX_RECOMMENDATIONS: usize = 10;

/// Above this temperature the weather-driven suggestions switch to cooling
/// foods.
const HOT_WEATHER_C: f64 = 30.0;

/// Candidate foods per category, each with a representative nutrient amount.
fn candidate_foods(nutrient: TrackedNutrient) -> [(&'static str, &'static str); 3] {
    match nutrient {
        TrackedNutrient::Protein => [("Chicken", "27 g"), ("Eggs", "13 g"), ("Paneer", "18 g")],
        TrackedNutrient::Iron => [("Spinach", "2.7 mg"), ("Liver", "6.5 mg"), ("Beans", "3.7 mg")],
        TrackedNutrient::Calcium => [("Milk", "120 mg"), ("Curd", "80 mg"), ("Almonds", "75 mg")],
        TrackedNutrient::Fiber => [("Oats", "10 g"), ("Apple", "4.5 g"), ("Carrots", "3 g")],
        TrackedNutrient::VitaminC => [("Orange", "53 mg"), ("Guava", "200 mg"), ("Kiwi", "90 mg")],
    }
}

/// Selects foods for every deficient category in report order, appends two
/// weather-conditioned suggestions, and truncates to `MAX_RECOMMENDATIONS`.
pub fn recommend(
    deficiencies: &DeficiencyReport,
    weather: Option<&WeatherReport>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    for nutrient in deficiencies.keys() {
        for (food, amount) in candidate_foods(*nutrient) {
            recommendations.push(Recommendation::new(food, amount));
        }
    }

    let seasonal = match weather {
        Some(report) if report.temp_c > HOT_WEATHER_C => ["Cucumber", "Yogurt"],
        _ => ["Soup", "Eggs"],
    };
    for food in seasonal {
        recommendations.push(Recommendation::new(food, "-"));
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
