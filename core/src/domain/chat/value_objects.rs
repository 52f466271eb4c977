use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::weather::entities::WeatherReport;

/// One chat-completion call: a system prompt carrying nutrition context and
/// the user's message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The analysis context the frontend echoes back with a chat message. Maps
/// are keyed by display names ("Protein", "Vitamin C", ...) and values are
/// the formatted report strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AnalysisSnapshot {
    #[schema(value_type = Object)]
    pub total_nutrients: BTreeMap<String, String>,
    #[schema(value_type = Object)]
    pub deficient: BTreeMap<String, String>,
    pub weather: Option<WeatherReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatInput {
    pub message: String,
    pub analysis: Option<AnalysisSnapshot>,
    pub lang: String,
}
