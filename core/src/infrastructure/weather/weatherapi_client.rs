use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    weather::{entities::WeatherReport, ports::WeatherClient},
};

const WEATHER_API_URL: &str = "http://api.weatherapi.com/v1/current.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    condition: ConditionText,
    temp_c: f64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct ConditionText {
    text: String,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }
}

impl WeatherClient for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, CoreError> {
        if self.api_key.is_empty() {
            return Err(CoreError::ConfigurationMissing("weather"));
        }

        let response = self
            .client
            .get(WEATHER_API_URL)
            .timeout(REQUEST_TIMEOUT)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("aqi", "no"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Weather API request failed: {}", e);
                CoreError::ExternalServiceError(format!("weather API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Weather API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "weather API returned error: {status} - {error_text}"
            )));
        }

        let payload: WeatherApiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse weather response: {}", e);
            CoreError::MalformedProviderResponse(format!("weather response: {e}"))
        })?;

        Ok(WeatherReport {
            condition: payload.current.condition.text,
            temp_c: payload.current.temp_c,
            humidity: payload.current.humidity,
        })
    }
}
