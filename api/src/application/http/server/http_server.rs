use std::sync::{Arc, OnceLock};

use crate::application::http::analysis::router::analysis_routes;
use crate::application::http::chat::router::chat_routes;
use crate::application::http::grocery::router::grocery_routes;
use crate::application::http::health::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi;
use crate::args::Args;

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use axum_prometheus::PrometheusMetricLayer;
use nutriguard_core::application::create_service;
use nutriguard_core::domain::common::NutriguardConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::info_span;
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> AppState {
    let config = NutriguardConfig::from(args.as_ref().clone());
    let service = create_service(config);
    AppState::new(args, service)
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Router {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    // The reference frontend is served from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    // The Prometheus recorder may only be installed once per process, so the
    // pair is shared across router instances.
    static METRIC_PAIR: OnceLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> =
        OnceLock::new();
    let (prometheus_layer, metric_handle) =
        METRIC_PAIR.get_or_init(PrometheusMetricLayer::pair).clone();

    axum::Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::build()))
        .merge(analysis_routes())
        .merge(chat_routes())
        .merge(grocery_routes())
        .merge(health_routes())
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state)
}
