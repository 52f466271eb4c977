use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{nutrition::entities::TrackedNutrient, weather::entities::WeatherReport};

use super::entities::UserProfile;

/// One food entry from the caller: name plus consumed quantity in grams.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPortion {
    pub name: String,
    pub quantity_g: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeInput {
    pub city: String,
    pub items: Vec<FoodPortion>,
    pub profile: UserProfile,
}

/// Shortfall display strings per deficient category, e.g. "12.34 g" or
/// "5.0 mg". Categories meeting their threshold are absent, not zero.
pub type DeficiencyReport = BTreeMap<TrackedNutrient, String>;

/// A recommended food with a representative nutrient amount, serialized as a
/// two-element array for wire compatibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation(pub String, pub String);

impl Recommendation {
    pub fn new(food: &str, amount: &str) -> Self {
        Self(food.into(), amount.into())
    }
}

/// Assembled result of one aggregation request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalysisReport {
    pub weather: WeatherReport,
    #[schema(value_type = Object)]
    pub total_nutrients: BTreeMap<TrackedNutrient, String>,
    #[schema(value_type = Object)]
    pub deficient: DeficiencyReport,
    #[schema(value_type = Vec<Vec<String>>)]
    pub recommendations: Vec<Recommendation>,
}
