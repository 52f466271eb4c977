use crate::application::http::{
    analysis::router::AnalysisApiDoc, chat::router::ChatApiDoc, grocery::router::GroceryApiDoc,
    health::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "NutriGuard API",
    description = "Weather-aware nutrient analysis, deficiency estimation and AI dietician"
))]
pub struct ApiDoc;

/// Full document with every router's paths merged in. The routers mount at
/// the root, so nesting under a prefix would mangle the paths.
pub fn build() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(AnalysisApiDoc::openapi());
    doc.merge(ChatApiDoc::openapi());
    doc.merge(GroceryApiDoc::openapi());
    doc.merge(HealthApiDoc::openapi());
    doc
}
