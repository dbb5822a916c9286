//! API Routes
//!
//! - `/api/orchestrate` - run the full competitive-analysis pipeline
//! - `/api/metrics` - expand metric categories for company comparison
//! - `/api/health` - health checks

pub mod health;
pub mod metrics;
pub mod orchestrate;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(orchestrate::router(state))
        .merge(metrics::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
}
