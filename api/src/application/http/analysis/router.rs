use axum::{routing::post, Router};
use utoipa::OpenApi;

use super::handlers::analyze::{__path_analyze, analyze};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze))]
pub struct AnalysisApiDoc;

pub fn analysis_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze))
}
