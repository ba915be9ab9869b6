mod analysis;
mod api_client;
mod config;
mod errors;
mod generation;
mod models;
mod routes;
mod state;
mod storage;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::scoring::RubricScorer;
use crate::config::Config;
use crate::generation::orchestrator::GenerationOrchestrator;
use crate::generation::provider::ContentProvider;
use crate::generation::remote::RemoteApiProvider;
use crate::generation::secondary::SecondaryApiProvider;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::LogSink;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Rankcraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize provider chain: primary → secondary → template
    let orchestrator = build_orchestrator(&config)?;

    let state = AppState {
        config: config.clone(),
        orchestrator: Arc::new(orchestrator),
        scorer: Arc::new(RubricScorer),
        sink: Arc::new(LogSink),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_orchestrator(config: &Config) -> Result<GenerationOrchestrator> {
    let remote = RemoteApiProvider::new(
        config.primary_provider_url.clone(),
        config.primary_provider_timeout,
    )?;
    let secondary = SecondaryApiProvider::new(
        config.secondary_provider_url.clone(),
        config.secondary_provider_api_key.clone(),
        config.secondary_provider_timeout,
    )?;

    let providers: Vec<Arc<dyn ContentProvider>> = vec![Arc::new(remote), Arc::new(secondary)];
    for provider in &providers {
        info!(
            "Provider {}: {} (timeout {}s)",
            provider.kind(),
            if provider.is_available() { "enabled" } else { "disabled" },
            provider.timeout().as_secs()
        );
    }

    Ok(GenerationOrchestrator::new(providers))
}
