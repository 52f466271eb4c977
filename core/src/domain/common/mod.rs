pub mod de;
pub mod entities;
pub mod services;

/// Process-wide configuration, built once at startup from CLI/env arguments
/// and passed into the collaborators. Core logic never reads the environment
/// on its own.
#[derive(Clone, Debug)]
pub struct NutriguardConfig {
    pub weather: WeatherConfig,
    pub usda: UsdaConfig,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct WeatherConfig {
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct UsdaConfig {
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub groq_api_key: String,
    pub groq_model: String,
}
