//! Remote agent client
//!
//! Every downstream agent is reached the same way: one JSON POST, one JSON
//! response. A call is a single network round-trip with no internal retry;
//! any non-2xx status or transport failure is surfaced immediately and is
//! fatal to the orchestration run.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::AgentsConfig;
use crate::types::{AppError, AppResult};

/// The five downstream agents the orchestrator drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Discovery,
    Research,
    Categorization,
    Summarization,
    Critique,
}

impl AgentKind {
    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Discovery => "discovery",
            AgentKind::Research => "research",
            AgentKind::Categorization => "categorization",
            AgentKind::Summarization => "summarization",
            AgentKind::Critique => "critique",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Uniform contract for invoking one named remote agent.
#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn call(&self, agent: AgentKind, payload: Value) -> AppResult<Value>;
}

/// HTTP implementation backed by a shared reqwest client.
pub struct HttpAgentClient {
    http: reqwest::Client,
    agents: AgentsConfig,
}

impl HttpAgentClient {
    pub fn new(agents: AgentsConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(agents.timeout_secs))
            .build()?;
        Ok(Self { http, agents })
    }

    fn url_for(&self, agent: AgentKind) -> &str {
        match agent {
            AgentKind::Discovery => &self.agents.discovery_url,
            AgentKind::Research => &self.agents.research_url,
            AgentKind::Categorization => &self.agents.categorization_url,
            AgentKind::Summarization => &self.agents.summarization_url,
            AgentKind::Critique => &self.agents.critique_url,
        }
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    async fn call(&self, agent: AgentKind, payload: Value) -> AppResult<Value> {
        let url = self.url_for(agent);
        info!(agent = %agent, url = %url, "Calling agent");
        debug!(payload = %payload, "Agent request payload");

        let response = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|source| AppError::Transport {
                agent: agent.name(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| AppError::Transport {
            agent: agent.name(),
            source,
        })?;

        info!(
            agent = %agent,
            status = status.as_u16(),
            body = %truncate(&body, 512),
            "Agent response"
        );

        if !status.is_success() {
            error!(agent = %agent, status = status.as_u16(), "Agent returned an error status");
            return Err(AppError::Upstream {
                agent: agent.name(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AppError::Malformed {
            agent: agent.name(),
            detail: format!("invalid JSON: {e}"),
        })
    }
}

/// Clip a response body for log output.
fn truncate(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn agents_config(base: &str) -> AgentsConfig {
        AgentsConfig {
            discovery_url: format!("{base}/generate"),
            research_url: format!("{base}/search"),
            categorization_url: format!("{base}/categorize"),
            summarization_url: format!("{base}/finalize_summary"),
            critique_url: format!("{base}/reflect-and-improve"),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn call_returns_parsed_json_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/generate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"competitors":["Acme"],"overview":"Two players"}"#)
            .create_async()
            .await;

        let client = HttpAgentClient::new(agents_config(&server.url())).unwrap();
        let value = client
            .call(AgentKind::Discovery, json!({"industry": "cloud storage"}))
            .await
            .unwrap();

        assert_eq!(value["competitors"][0], "Acme");
        assert_eq!(value["overview"], "Two players");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_2xx_status_is_an_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/search")
            .with_status(503)
            .with_body("backend down")
            .create_async()
            .await;

        let client = HttpAgentClient::new(agents_config(&server.url())).unwrap();
        let err = client
            .call(AgentKind::Research, json!({"competitors": ["Acme"]}))
            .await
            .unwrap_err();

        match err {
            AppError::Upstream { agent, status, body } => {
                assert_eq!(agent, "research");
                assert_eq!(status, 503);
                assert_eq!(body, "backend down");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_success_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/categorize")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = HttpAgentClient::new(agents_config(&server.url())).unwrap();
        let err = client
            .call(AgentKind::Categorization, json!({"competitor": "Acme"}))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Malformed { agent: "categorization", .. }));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("abcdef", 4), "abcd");
        assert_eq!(truncate("ab", 4), "ab");
        assert_eq!(truncate("héllo wörld", 3), "hél");
    }
}
