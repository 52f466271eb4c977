use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current conditions for the caller's city. The default value is the safe
/// fallback used whenever the weather provider is unreachable or
/// unconfigured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherReport {
    pub condition: String,
    #[serde(rename = "temp")]
    pub temp_c: f64,
    pub humidity: i64,
}

impl Default for WeatherReport {
    fn default() -> Self {
        Self {
            condition: "Unknown".into(),
            temp_c: 25.0,
            humidity: 50,
        }
    }
}
