use serde::Deserialize;

use crate::domain::{common::de::lenient_string, grocery::entities::GroceryItem};

/// Extended health profile driving the grocery-list prompt. Every field is
/// optional and loosely typed; the reference frontend mixes numbers and
/// strings freely.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroceryProfile {
    #[serde(deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(deserialize_with = "lenient_string")]
    pub height: String,
    #[serde(deserialize_with = "lenient_string")]
    pub weight: String,
    #[serde(rename = "activityLevel", deserialize_with = "lenient_string")]
    pub activity_level: String,
    #[serde(rename = "systolicBP", deserialize_with = "lenient_string")]
    pub systolic_bp: String,
    #[serde(rename = "diastolicBP", deserialize_with = "lenient_string")]
    pub diastolic_bp: String,
    #[serde(rename = "bloodSugar", deserialize_with = "lenient_string")]
    pub blood_sugar: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cholesterol: String,
    #[serde(rename = "dietaryGoals", deserialize_with = "lenient_string")]
    pub dietary_goals: String,
    #[serde(rename = "dietaryRestrictions", deserialize_with = "lenient_string")]
    pub dietary_restrictions: String,
    #[serde(rename = "preferredCuisines", deserialize_with = "lenient_string")]
    pub preferred_cuisines: String,
    #[serde(rename = "budgetLevel", deserialize_with = "lenient_string")]
    pub budget_level: String,
    #[serde(rename = "mealPlanDuration", deserialize_with = "lenient_string")]
    pub meal_plan_duration: String,
    #[serde(deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(deserialize_with = "lenient_string")]
    pub weather: String,
}

/// Generated list plus whether it came from the fixed fallback because the
/// provider's output failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryListOutput {
    pub items: Vec<GroceryItem>,
    pub fallback: bool,
}
