use crate::domain::{
    chat::{ports::LlmClient, value_objects::ChatCompletionRequest},
    common::{entities::app_errors::CoreError, services::Service},
    grocery::{
        helpers::{build_grocery_prompt, fallback_grocery_list, parse_grocery_list, GROCERY_SYSTEM_PROMPT},
        ports::GroceryService,
        value_objects::{GroceryListOutput, GroceryProfile},
    },
    nutrition::ports::NutrientDataClient,
    weather::ports::WeatherClient,
};

const GROCERY_TEMPERATURE: f32 = 0.7;
const GROCERY_MAX_TOKENS: u32 = 2000;

impl<W, N, L> GroceryService for Service<W, N, L>
where
    W: WeatherClient,
    N: NutrientDataClient,
    L: LlmClient,
{
    async fn generate_list(&self, profile: GroceryProfile) -> Result<GroceryListOutput, CoreError> {
        let request = ChatCompletionRequest {
            system_prompt: GROCERY_SYSTEM_PROMPT.into(),
            user_prompt: build_grocery_prompt(&profile),
            temperature: GROCERY_TEMPERATURE,
            max_tokens: GROCERY_MAX_TOKENS,
        };

        let raw = self.llm_client.chat(request).await?;

        match parse_grocery_list(&raw) {
            Ok(items) => Ok(GroceryListOutput {
                items,
                fallback: false,
            }),
            Err(e) => {
                tracing::warn!("grocery list did not parse, substituting fallback: {e}");
                Ok(GroceryListOutput {
                    items: fallback_grocery_list(),
                    fallback: true,
                })
            }
        }
    }
}
