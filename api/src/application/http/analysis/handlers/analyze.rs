use axum::extract::State;
use nutriguard_core::domain::nutrition::{
    entities::{Gender, UserProfile},
    ports::AnalysisService,
    value_objects::{AnalysisReport, AnalyzeInput, FoodPortion},
};

use crate::application::http::{
    analysis::validators::AnalyzeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze nutrient intake",
    description = "Aggregates nutrients for the given food quantities, flags \
                   deficiencies against BMI-adjusted baselines, and returns \
                   weather-aware food recommendations",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, body = AnalysisReport),
        (status = 400, description = "City missing or body malformed")
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeRequest>,
) -> Result<Response<AnalysisReport>, ApiError> {
    let input = AnalyzeInput {
        city: payload.city,
        items: payload
            .items
            .into_iter()
            .map(|item| FoodPortion {
                name: item.name,
                quantity_g: item.qty,
            })
            .collect(),
        profile: UserProfile {
            gender: Gender::parse(&payload.gender),
            height_cm: payload.height,
            weight_kg: payload.weight,
        },
    };

    let report = state.service.analyze(input).await.map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
