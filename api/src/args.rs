use clap::Parser;
use nutriguard_core::domain::common::{LlmConfig, NutriguardConfig, UsdaConfig, WeatherConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriguard-api", about = "NutriGuard nutrition analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    /// weatherapi.com key. Empty means weather defaults are served.
    #[arg(long, env = "WEATHER_API_KEY", default_value = "", hide_env_values = true)]
    pub weather_api_key: String,

    /// USDA FoodData Central key.
    #[arg(long, env = "USDA_API_KEY", default_value = "DEMO_KEY", hide_env_values = true)]
    pub usda_api_key: String,

    /// Groq key for the chat assistant and grocery-list generation.
    #[arg(long, env = "GROQ_API_KEY", default_value = "", hide_env_values = true)]
    pub groq_api_key: String,

    #[arg(long, env = "GROQ_MODEL", default_value = "llama-3.3-70b-versatile")]
    pub groq_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

impl From<Args> for NutriguardConfig {
    fn from(args: Args) -> Self {
        Self {
            weather: WeatherConfig {
                api_key: args.weather_api_key,
            },
            usda: UsdaConfig {
                api_key: args.usda_api_key,
            },
            llm: LlmConfig {
                groq_api_key: args.groq_api_key,
                groq_model: args.groq_model,
            },
        }
    }
}
