use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nutriguard_api::application::http::server::http_server;
use nutriguard_api::args::Args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Arc::new(Args::parse());

    if args.weather_api_key.is_empty() {
        warn!("WEATHER_API_KEY is not set; weather defaults will be served");
    }
    if args.groq_api_key.is_empty() {
        warn!("GROQ_API_KEY is not set; chat and grocery generation are degraded");
    }

    let state = http_server::state(args.clone());
    let router = http_server::router(state);

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
