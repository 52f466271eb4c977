use axum::{routing::post, Router};
use utoipa::OpenApi;

use super::handlers::generate_grocery_list::{__path_generate_grocery_list, generate_grocery_list};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_grocery_list))]
pub struct GroceryApiDoc;

pub fn grocery_routes() -> Router<AppState> {
    Router::new().route("/api/generate_grocery_list", post(generate_grocery_list))
}
