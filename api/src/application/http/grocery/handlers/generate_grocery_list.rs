use axum::{extract::State, Json};
use nutriguard_core::domain::grocery::{
    entities::GroceryItem, ports::GroceryService, value_objects::GroceryProfile,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

const FALLBACK_NOTE: &str = "Using fallback list due to AI response format issue";

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateGroceryListResponse {
    pub grocery_list: Vec<GroceryItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/generate_grocery_list",
    tag = "grocery",
    summary = "Generate a personalized grocery list",
    description = "Builds a grocery list from the submitted health profile. \
                   When the provider returns unparseable output the fixed \
                   fallback list is served with a note",
    request_body = Object,
    responses(
        (status = 200, body = GenerateGroceryListResponse),
        (status = 500, description = "Provider call failed")
    )
)]
pub async fn generate_grocery_list(
    State(state): State<AppState>,
    Json(profile): Json<GroceryProfile>,
) -> Result<Response<GenerateGroceryListResponse>, ApiError> {
    let output = state
        .service
        .generate_list(profile)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateGroceryListResponse {
        grocery_list: output.items,
        note: output.fallback.then(|| FALLBACK_NOTE.to_string()),
    }))
}
