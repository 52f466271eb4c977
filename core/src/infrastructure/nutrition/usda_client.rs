use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutrientSample, ports::NutrientDataClient},
};

const FDC_SEARCH_URL: &str = "https://api.nal.usda.gov/fdc/v1/foods/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// USDA FoodData Central search client. Takes the best search hit for a food
/// name and maps its nutrient rows; amounts are per 100 g of food.
#[derive(Debug, Clone)]
pub struct UsdaClient {
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
struct SearchFood {
    #[serde(default, rename = "foodNutrients")]
    food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrient {
    #[serde(rename = "nutrientName", alias = "name")]
    name: Option<String>,
    value: Option<f64>,
    #[serde(rename = "unitName", alias = "unit")]
    unit: Option<String>,
}

impl UsdaClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }
}

impl NutrientDataClient for UsdaClient {
    async fn fetch_nutrients(&self, food: &str) -> Result<Vec<NutrientSample>, CoreError> {
        if self.api_key.is_empty() {
            return Err(CoreError::ConfigurationMissing("USDA"));
        }

        let response = self
            .client
            .get(FDC_SEARCH_URL)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", food),
                ("pageSize", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("USDA API request failed for {}: {}", food, e);
                CoreError::ExternalServiceError(format!("USDA API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("USDA API error for {}: {} - {}", food, status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "USDA API returned error: {status} - {error_text}"
            )));
        }

        let payload: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse USDA response: {}", e);
            CoreError::MalformedProviderResponse(format!("USDA response: {e}"))
        })?;

        let Some(best_hit) = payload.foods.into_iter().next() else {
            return Ok(Vec::new());
        };

        Ok(best_hit
            .food_nutrients
            .into_iter()
            .filter_map(|nutrient| {
                let name = nutrient.name?;
                let amount = nutrient.value?;
                Some(NutrientSample {
                    name: name.trim().to_string(),
                    amount,
                    unit: nutrient.unit.unwrap_or_default(),
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrient_rows_missing_name_or_value_are_dropped() {
        let payload: SearchResponse = serde_json::from_str(
            r#"{
                "foods": [{
                    "foodNutrients": [
                        {"nutrientName": "Protein", "value": 10.0, "unitName": "G"},
                        {"nutrientName": "Energy"},
                        {"value": 3.0, "unitName": "MG"},
                        {"name": "Iron, Fe", "value": 2.7, "unit": "mg"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        let samples: Vec<NutrientSample> = payload
            .foods
            .into_iter()
            .next()
            .unwrap()
            .food_nutrients
            .into_iter()
            .filter_map(|n| {
                let name = n.name?;
                let amount = n.value?;
                Some(NutrientSample {
                    name: name.trim().to_string(),
                    amount,
                    unit: n.unit.unwrap_or_default(),
                })
            })
            .collect();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name, "Protein");
        assert_eq!(samples[1].name, "Iron, Fe");
        assert_eq!(samples[1].unit, "mg");
    }

    #[test]
    fn empty_search_result_deserializes() {
        let payload: SearchResponse = serde_json::from_str(r#"{"totalHits": 0}"#).unwrap();
        assert!(payload.foods.is_empty());
    }
}
