mod catalog;
mod config;
mod errors;
mod llm_client;
mod models;
mod pitch;
mod places;
mod prospecting;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::ProductCatalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::places::details::DetailsClient;
use crate::places::PlacesClient;
use crate::prospecting::classifier::{BatchClassifier, ClassificationProvider};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("creamery_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Creamery API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize places-search client (required capability)
    let places = PlacesClient::new(config.geoapify_api_key.clone());
    info!("Places search client initialized");

    // Details/reviews client is optional; enrichment 503s without it
    let details = config
        .google_places_api_key
        .clone()
        .map(DetailsClient::new);
    info!(
        "Details client {}",
        if details.is_some() {
            "initialized"
        } else {
            "not configured (enrichment disabled)"
        }
    );

    // LLM client is optional; classification and pitching degrade without it
    let llm = config.anthropic_api_key.clone().map(LlmClient::new);
    info!(
        "LLM client {}",
        if llm.is_some() {
            "initialized"
        } else {
            "not configured (keyword filtering and fallback pitches only)"
        }
    );

    let provider = llm
        .clone()
        .map(|client| Arc::new(client) as Arc<dyn ClassificationProvider>);
    let classifier = Arc::new(BatchClassifier::new(provider));

    let catalog = Arc::new(ProductCatalog::builtin());
    info!("Product catalog loaded ({} products)", catalog.entries().len());

    // Build app state
    let state = AppState {
        config: config.clone(),
        places,
        details,
        llm,
        classifier,
        catalog,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
