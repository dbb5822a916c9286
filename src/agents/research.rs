//! Research fan-out
//!
//! Issues one research call per competitor concurrently and merges the
//! per-competitor results after the join. The first failing call resolves
//! the join and drops the remaining futures, so a single upstream failure
//! aborts the whole stage with that one error.

use std::collections::HashMap;

use futures::future;
use serde_json::json;
use tracing::info;

use crate::agents::client::{AgentClient, AgentKind};
use crate::models::SearchResult;
use crate::types::{AppError, AppResult};

/// Research findings keyed by competitor. Built once, read-only afterwards.
pub type ResearchSet = HashMap<String, Vec<SearchResult>>;

pub struct ResearchFanout;

impl ResearchFanout {
    pub async fn run(
        client: &dyn AgentClient,
        competitors: &[String],
        max_results: u32,
    ) -> AppResult<ResearchSet> {
        let lookups = competitors.iter().map(|competitor| async move {
            let results = Self::research_competitor(client, competitor, max_results).await?;
            Ok::<_, AppError>((competitor.clone(), results))
        });

        let pairs = future::try_join_all(lookups).await?;
        info!(competitors = pairs.len(), "Research fan-out complete");
        Ok(pairs.into_iter().collect())
    }

    /// One research call. The agent answers either with a per-competitor map
    /// (`competitor_results`) or a flat `results` list; absent both, the
    /// competitor simply has no findings.
    async fn research_competitor(
        client: &dyn AgentClient,
        competitor: &str,
        max_results: u32,
    ) -> AppResult<Vec<SearchResult>> {
        let payload = json!({ "competitors": [competitor], "max_results": max_results });
        let response = client.call(AgentKind::Research, payload).await?;

        let raw = if let Some(by_competitor) = response.get("competitor_results") {
            by_competitor
                .get(competitor)
                .cloned()
                .unwrap_or_else(|| json!([]))
        } else {
            response.get("results").cloned().unwrap_or_else(|| json!([]))
        };

        serde_json::from_value(raw).map_err(|e| AppError::Malformed {
            agent: AgentKind::Research.name(),
            detail: format!("unexpected search result shape: {e}"),
        })
    }
}
