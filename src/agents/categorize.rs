//! Categorization fan-out
//!
//! Turns each competitor's research findings into a structured finding
//! record, one concurrent call per competitor. A competitor's categorization
//! never starts before its research entry exists; competitors have no
//! ordering requirement relative to each other.

use std::collections::HashMap;

use futures::future;
use serde_json::json;
use tracing::info;

use crate::agents::client::{AgentClient, AgentKind};
use crate::agents::research::ResearchSet;
use crate::models::{CategorizedFinding, SearchResult};
use crate::types::{AppError, AppResult};

pub struct CategorizationFanout;

impl CategorizationFanout {
    pub async fn run(
        client: &dyn AgentClient,
        competitors: &[String],
        research: &ResearchSet,
    ) -> AppResult<HashMap<String, CategorizedFinding>> {
        let jobs = competitors.iter().map(|competitor| {
            let results = research
                .get(competitor.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            async move {
                let finding = Self::categorize_competitor(client, competitor, results).await?;
                Ok::<_, AppError>((competitor.clone(), finding))
            }
        });

        let pairs = future::try_join_all(jobs).await?;
        info!(competitors = pairs.len(), "Categorization fan-out complete");
        Ok(pairs.into_iter().collect())
    }

    /// Categorize one competitor's research. Only `title`, `summary` and
    /// `url` of each result are forwarded. An empty research list is still
    /// sent; the agent answers it with all-empty finding fields.
    async fn categorize_competitor(
        client: &dyn AgentClient,
        competitor: &str,
        results: &[SearchResult],
    ) -> AppResult<CategorizedFinding> {
        let filtered: Vec<_> = results
            .iter()
            .map(|res| json!({ "title": res.title, "summary": res.summary, "url": res.url }))
            .collect();
        let payload = json!({ "competitor": competitor, "search_results": filtered });
        let response = client.call(AgentKind::Categorization, payload).await?;

        serde_json::from_value(response).map_err(|e| AppError::Malformed {
            agent: AgentKind::Categorization.name(),
            detail: format!("unexpected finding shape: {e}"),
        })
    }
}
