// Main entry point for the job discovery engine

use std::sync::Arc;

use anyhow::{Context, Result};
use customsearch_client::CustomSearchClient;
use server_core::domains::jobs::GoogleJobSearcher;
use server_core::kernel::JetStreamPublisher;
use server_core::server::{build_app, AppState};
use server_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Jobcast discovery engine");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to the broker; one connection serves the whole process
    tracing::info!("Connecting to NATS...");
    let publisher = JetStreamPublisher::connect(&config.nats_url)
        .await
        .context("Failed to connect to the message broker")?;
    tracing::info!(url = %config.nats_url, "Broker connected, job-events stream ready");

    // Build application
    let searcher = GoogleJobSearcher::new(CustomSearchClient::new(
        config.google_api_key.clone(),
        config.google_cx_id.clone(),
    ));
    let app = build_app(AppState {
        searcher: Arc::new(searcher),
        publisher: Arc::new(publisher),
    });

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
