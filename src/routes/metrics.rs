use axum::{routing::post, Json, Router};
use tracing::info;

use crate::metrics::expand_metrics;
use crate::models::{MetricsRequest, MetricsResponse};

pub fn router() -> Router {
    Router::new().route("/api/metrics", post(compare_metrics))
}

async fn compare_metrics(Json(request): Json<MetricsRequest>) -> Json<MetricsResponse> {
    info!(
        industry = %request.industry,
        selected = request.selected_metrics.len(),
        "Metrics comparison request"
    );

    let selected_metrics = expand_metrics(&request.selected_metrics);
    Json(MetricsResponse {
        industry: request.industry,
        selected_metrics,
    })
}
