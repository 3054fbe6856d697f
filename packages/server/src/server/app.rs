//! Application setup and router wiring.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::domains::jobs::JobSearcher;
use crate::kernel::nats::EventPublisher;
use crate::server::routes::{health_handler, update_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub searcher: Arc<dyn JobSearcher>,
    pub publisher: Arc<dyn EventPublisher>,
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/update", post(update_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
