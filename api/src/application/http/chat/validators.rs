use nutriguard_core::domain::chat::value_objects::AnalysisSnapshot;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_lang() -> String {
    "en".into()
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "No message provided"))]
    pub message: String,
    /// Analysis context echoed back by the frontend, if an analysis ran.
    #[serde(default)]
    pub analysis_data: Option<AnalysisSnapshot>,
    #[serde(default = "default_lang")]
    pub lang: String,
}
