use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::agents;
use crate::models::{AnalysisReport, AppState, OrchestrateRequest};
use crate::types::AppError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/orchestrate", post(orchestrate))
        .with_state(state)
}

async fn orchestrate(
    State(state): State<AppState>,
    Json(request): Json<OrchestrateRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    info!(
        industry = %request.industry,
        specified = request.specified_competitors.len(),
        "Orchestration request received"
    );

    let report = agents::run_analysis_pipeline(
        state.agents.as_ref(),
        &request.industry,
        &request.specified_competitors,
        &state.config.pipeline,
    )
    .await?;

    Ok(Json(report))
}
