use crate::domain::{
    chat::{
        helpers::build_system_prompt,
        ports::{ChatService, LlmClient},
        value_objects::{ChatCompletionRequest, ChatInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::ports::NutrientDataClient,
    weather::ports::WeatherClient,
};

const CHAT_TEMPERATURE: f32 = 0.7;
const CHAT_MAX_TOKENS: u32 = 500;

impl<W, N, L> ChatService for Service<W, N, L>
where
    W: WeatherClient,
    N: NutrientDataClient,
    L: LlmClient,
{
    async fn reply(&self, input: ChatInput) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            system_prompt: build_system_prompt(input.analysis.as_ref(), &input.lang),
            user_prompt: input.message,
            temperature: CHAT_TEMPERATURE,
            max_tokens: CHAT_MAX_TOKENS,
        };

        // This text goes straight back to the user, so provider failures are
        // rendered as a reply rather than propagated.
        match self.llm_client.chat(request).await {
            Ok(reply) => Ok(reply),
            Err(e @ CoreError::ConfigurationMissing(_)) => Ok(format!(
                "{e}. Please set GROQ_API_KEY to enable the assistant."
            )),
            Err(e) => {
                tracing::error!("chat completion failed: {e}");
                Ok(format!(
                    "Sorry, I encountered an error connecting to the AI service: {e}"
                ))
            }
        }
    }
}
