use crate::{
    domain::common::{services::Service, NutriguardConfig},
    infrastructure::{llm::GroqClient, nutrition::UsdaClient, weather::WeatherApiClient},
};

/// The concrete service wired to the real providers.
pub type NutriguardService = Service<WeatherApiClient, UsdaClient, GroqClient>;

pub fn create_service(config: NutriguardConfig) -> NutriguardService {
    Service::new(
        WeatherApiClient::new(config.weather.api_key),
        UsdaClient::new(config.usda.api_key),
        GroqClient::new(config.llm.groq_api_key, config.llm.groq_model),
    )
}
