use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub agents: AgentsConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Endpoints of the five downstream agents. Defaults point at the hosted
/// deployment; each is overridable for local or staged agent instances.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentsConfig {
    pub discovery_url: String,
    pub research_url: String,
    pub categorization_url: String,
    pub summarization_url: String,
    pub critique_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub max_reflection_iterations: u32,
    pub research_max_results: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            agents: AgentsConfig {
                discovery_url: env::var("DISCOVERY_AGENT_URL").unwrap_or_else(|_| {
                    "https://serverless.on-demand.io/apps/generatecompetitorsapi/analysis/generate"
                        .to_string()
                }),
                research_url: env::var("RESEARCH_AGENT_URL").unwrap_or_else(|_| {
                    "https://serverless.on-demand.io/apps/websearchapi/search".to_string()
                }),
                categorization_url: env::var("CATEGORIZATION_AGENT_URL").unwrap_or_else(|_| {
                    "https://serverless.on-demand.io/apps/categorizefindingsapi/categorize"
                        .to_string()
                }),
                summarization_url: env::var("SUMMARIZATION_AGENT_URL").unwrap_or_else(|_| {
                    "https://serverless.on-demand.io/apps/finalizesummaryapi/finalize_summary"
                        .to_string()
                }),
                critique_url: env::var("CRITIQUE_AGENT_URL").unwrap_or_else(|_| {
                    "https://serverless.on-demand.io/apps/reflectionagentapi/reflect-and-improve"
                        .to_string()
                }),
                timeout_secs: env::var("AGENT_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()?,
            },
            pipeline: PipelineConfig {
                max_reflection_iterations: env::var("MAX_REFLECTION_ITERATIONS")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()?,
                research_max_results: env::var("RESEARCH_MAX_RESULTS")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()?,
            },
        })
    }
}
