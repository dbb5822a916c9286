//! Competitor discovery
//!
//! Determines the working competitor set and industry overview. A non-empty
//! caller-supplied list is trusted as-is and costs no remote call; otherwise
//! the discovery agent proposes the set. No validation that the returned set
//! is non-empty: downstream fan-outs tolerate an empty set.

use serde_json::json;
use tracing::info;

use crate::agents::client::{AgentClient, AgentKind};
use crate::types::AppResult;

/// Competitor set plus the overview the rest of the pipeline works from.
#[derive(Debug, Clone)]
pub struct ResolvedCompetitors {
    pub competitors: Vec<String>,
    pub overview: String,
}

pub struct CompetitorResolver;

impl CompetitorResolver {
    pub async fn resolve(
        client: &dyn AgentClient,
        industry: &str,
        specified: &[String],
    ) -> AppResult<ResolvedCompetitors> {
        if !specified.is_empty() {
            info!(count = specified.len(), "Using caller-specified competitors");
            return Ok(ResolvedCompetitors {
                competitors: specified.to_vec(),
                overview: format!("Analysis of specified competitors in {industry} industry."),
            });
        }

        let response = client
            .call(AgentKind::Discovery, json!({ "industry": industry }))
            .await?;

        let competitors: Vec<String> = response
            .get("competitors")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|c| c.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        let overview = response
            .get("overview")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        info!(count = competitors.len(), "Discovery agent proposed competitors");
        Ok(ResolvedCompetitors {
            competitors,
            overview,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::StubAgent;
    use serde_json::json;

    #[tokio::test]
    async fn specified_competitors_skip_discovery() {
        let stub = StubAgent::new();
        let specified = vec!["Acme".to_string(), "Globex".to_string()];

        let resolved = CompetitorResolver::resolve(&stub, "cloud storage", &specified)
            .await
            .unwrap();

        assert_eq!(resolved.competitors, specified);
        assert_eq!(
            resolved.overview,
            "Analysis of specified competitors in cloud storage industry."
        );
        assert_eq!(stub.calls_for(AgentKind::Discovery), 0);
    }

    #[tokio::test]
    async fn empty_specified_list_invokes_discovery_agent() {
        let stub = StubAgent::new();
        stub.enqueue(
            AgentKind::Discovery,
            json!({"competitors": ["Initech", "Umbrella"], "overview": "Crowded market"}),
        );

        let resolved = CompetitorResolver::resolve(&stub, "cloud storage", &[])
            .await
            .unwrap();

        assert_eq!(resolved.competitors, vec!["Initech", "Umbrella"]);
        assert_eq!(resolved.overview, "Crowded market");
        assert_eq!(stub.calls_for(AgentKind::Discovery), 1);
        assert_eq!(
            stub.recorded()[0].1,
            json!({"industry": "cloud storage"})
        );
    }

    #[tokio::test]
    async fn missing_response_keys_default_to_empty() {
        let stub = StubAgent::new();
        stub.enqueue(AgentKind::Discovery, json!({}));

        let resolved = CompetitorResolver::resolve(&stub, "fintech", &[])
            .await
            .unwrap();

        assert!(resolved.competitors.is_empty());
        assert!(resolved.overview.is_empty());
    }
}
