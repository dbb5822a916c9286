//! Summary builder
//!
//! One summarization call over the aggregate state: industry, overview,
//! categorized findings and the collected sources. Produces the draft
//! narrative that seeds both `base_analysis` and `final_analysis`.

use std::collections::HashMap;

use serde_json::json;
use tracing::info;

use crate::agents::client::{AgentClient, AgentKind};
use crate::models::CategorizedFinding;
use crate::types::{AppError, AppResult};

pub struct SummaryBuilder;

impl SummaryBuilder {
    pub async fn build(
        client: &dyn AgentClient,
        industry: &str,
        overview: &str,
        findings: &HashMap<String, CategorizedFinding>,
        sources: &[String],
    ) -> AppResult<String> {
        let payload = json!({
            "industry": industry,
            "overview": overview,
            "findings": findings,
            "sources": sources,
        });
        let response = client.call(AgentKind::Summarization, payload).await?;

        let summary = response
            .get("summary")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| AppError::Malformed {
                agent: AgentKind::Summarization.name(),
                detail: "missing 'summary' field".to_string(),
            })?;

        info!(summary_len = summary.len(), "Summary draft produced");
        Ok(summary)
    }
}
