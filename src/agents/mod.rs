//! Agent Orchestration
//!
//! This module sequences the five remote analysis agents into one
//! competitive-analysis report:
//!
//! - **Discovery**: proposes the competitor set for an industry
//! - **Research**: web research per competitor (fan-out)
//! - **Categorization**: structures findings per competitor (fan-out)
//! - **Summarization**: drafts the narrative over the aggregate state
//! - **Critique**: iterative reflection feedback until convergence
//!
//! ## Pipeline Overview
//!
//! ```text
//! Industry (+ optional competitor list)
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Discovery  │  → competitor set + overview (skipped when specified)
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Research   │  → findings per competitor (concurrent fan-out)
//! └─────────────┘
//!      │
//!      ▼
//! ┌──────────────┐
//! │ Categorization│ → structured finding per competitor (concurrent fan-out)
//! └──────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Summary    │  → draft narrative
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │ Reflection  │  → feedback loop until convergence or cap
//! └─────────────┘
//!      │
//!      ▼
//!  Analysis report
//! ```

pub mod categorize;
pub mod client;
pub mod discovery;
pub mod reflection;
pub mod research;
pub mod summary;

// Re-export main components
pub use categorize::CategorizationFanout;
pub use client::{AgentClient, AgentKind, HttpAgentClient};
pub use discovery::CompetitorResolver;
pub use reflection::{ReflectionLoop, ReflectionOutcome};
pub use research::{ResearchFanout, ResearchSet};
pub use summary::SummaryBuilder;

use tracing::info;
use uuid::Uuid;

use crate::config::PipelineConfig;
use crate::models::{AnalysisReport, AnalysisState};
use crate::types::AppResult;

/// Execute the full analysis pipeline for one industry.
///
/// The state record is created empty, populated strictly in pipeline order
/// and discarded once the report is returned; it is never shared across
/// concurrent runs.
pub async fn run_analysis_pipeline(
    client: &dyn AgentClient,
    industry: &str,
    specified_competitors: &[String],
    pipeline: &PipelineConfig,
) -> AppResult<AnalysisReport> {
    let run_id = Uuid::new_v4();
    info!(%run_id, industry, "Starting analysis pipeline");

    let resolved = CompetitorResolver::resolve(client, industry, specified_competitors).await?;
    info!(%run_id, competitors = resolved.competitors.len(), "Competitor set resolved");

    let research_results =
        ResearchFanout::run(client, &resolved.competitors, pipeline.research_max_results).await?;
    let categorized_findings =
        CategorizationFanout::run(client, &resolved.competitors, &research_results).await?;

    let sources = collect_sources(&resolved.competitors, &research_results);
    info!(%run_id, sources = sources.len(), "Sources collected");

    let base_analysis = SummaryBuilder::build(
        client,
        industry,
        &resolved.overview,
        &categorized_findings,
        &sources,
    )
    .await?;

    let mut state = AnalysisState {
        industry: industry.to_string(),
        specified_competitors: specified_competitors.to_vec(),
        competitors: resolved.competitors.clone(),
        overview: resolved.overview,
        selected_competitors: resolved.competitors,
        research_results,
        categorized_findings,
        final_analysis: base_analysis.clone(),
        base_analysis,
        reflection_feedback: Vec::new(),
        reflection_iteration: 0,
        max_reflection_iterations: pipeline.max_reflection_iterations,
        next: "reflection".to_string(),
    };

    let outcome = ReflectionLoop::run(client, &mut state).await?;
    info!(
        %run_id,
        ?outcome,
        iterations = state.reflection_iteration,
        feedback = state.reflection_feedback.len(),
        "Analysis pipeline complete"
    );

    Ok(AnalysisReport {
        final_summary: state.final_analysis,
        sources,
        reflection_feedback: state.reflection_feedback,
    })
}

/// Flatten research URLs in competitor-then-result order.
///
/// Empty URLs are skipped; duplicates across competitors are kept. Derived
/// deterministically from the research set, never stored independently.
pub fn collect_sources(competitors: &[String], research: &ResearchSet) -> Vec<String> {
    competitors
        .iter()
        .filter_map(|competitor| research.get(competitor.as_str()))
        .flatten()
        .filter(|res| !res.url.is_empty())
        .map(|res| res.url.clone())
        .collect()
}
