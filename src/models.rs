use std::collections::HashMap;
use std::sync::Arc;

use crate::agents::client::AgentClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub agents: Arc<dyn AgentClient>,
}

// Wire models mirroring the agent JSON contracts

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrchestrateRequest {
    pub industry: String,
    /// Optional caller-supplied competitor list; non-empty skips discovery.
    #[serde(default)]
    pub specified_competitors: Vec<String>,
}

/// One research hit for a competitor. Owned by the research stage once
/// received and immutable thereafter.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
}

/// Structured finding record for one competitor. Every field defaults to an
/// empty list: "no research available" is a valid answer, not an error.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategorizedFinding {
    #[serde(default)]
    pub key_insights: Vec<String>,
    #[serde(default)]
    pub unique_capabilities: Vec<String>,
    #[serde(default)]
    pub unique_selling_points: Vec<String>,
    #[serde(default)]
    pub recent_innovations: Vec<String>,
    #[serde(default)]
    pub market_positioning: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub future_vision: Vec<String>,
}

/// The single aggregate record threaded through the pipeline and sent, in
/// full, to the critique agent each reflection iteration.
///
/// `selected_competitors` always mirrors `competitors` and `next` is always
/// "reflection"; both are kept so the serialized payload stays compatible
/// with the deployed critique agent's request schema.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisState {
    pub industry: String,
    pub specified_competitors: Vec<String>,
    pub competitors: Vec<String>,
    pub overview: String,
    pub selected_competitors: Vec<String>,
    pub research_results: HashMap<String, Vec<SearchResult>>,
    pub categorized_findings: HashMap<String, CategorizedFinding>,
    pub base_analysis: String,
    pub final_analysis: String,
    pub reflection_feedback: Vec<String>,
    pub reflection_iteration: u32,
    pub max_reflection_iterations: u32,
    pub next: String,
}

/// What the caller gets back from one orchestration run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub final_summary: String,
    pub sources: Vec<String>,
    pub reflection_feedback: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MetricsRequest {
    pub industry: String,
    #[serde(default)]
    pub selected_metrics: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MetricsResponse {
    pub industry: String,
    pub selected_metrics: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
