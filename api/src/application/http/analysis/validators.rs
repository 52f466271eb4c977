use nutriguard_core::domain::common::de::lenient_f64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeRequest {
    /// City for the weather context. The only hard-required input.
    #[validate(length(min = 1, message = "City required"))]
    pub city: String,
    #[serde(default)]
    pub items: Vec<FoodItemRequest>,
    /// "male", "female" or "other"; anything else is treated as male.
    #[serde(default)]
    pub gender: String,
    /// Height in cm. Numbers and numeric strings accepted; invalid input
    /// coerces to 0 (which disables the BMI adjustment).
    #[serde(default, deserialize_with = "lenient_f64")]
    pub height: f64,
    /// Weight in kg, same coercion as height.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FoodItemRequest {
    #[serde(default)]
    pub name: String,
    /// Consumed quantity in grams; items with qty <= 0 are skipped.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub qty: f64,
}
