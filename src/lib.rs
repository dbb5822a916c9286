// Rivalscope - multi-agent orchestration service for competitive analysis

pub mod agents;
pub mod config;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
