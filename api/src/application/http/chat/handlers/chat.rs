use axum::extract::State;
use nutriguard_core::domain::chat::{ports::ChatService, value_objects::ChatInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::ChatRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub ok: bool,
    pub reply: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Chat with the AI dietician",
    description = "Sends a message to the assistant, with the latest \
                   nutrition analysis as context. Provider failures come \
                   back as user-facing reply text",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, description = "Message missing")
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequest>,
) -> Result<Response<ChatResponse>, ApiError> {
    let reply = state
        .service
        .reply(ChatInput {
            message: payload.message,
            analysis: payload.analysis_data,
            lang: payload.lang,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse { ok: true, reply }))
}
