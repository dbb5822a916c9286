//! Reflection loop
//!
//! Sequentially asks the critique agent for feedback on the evolving
//! analysis until a call brings nothing new or the iteration cap is hit.
//! Strictly sequential: iteration i+1 always observes the fully updated
//! state from iteration i. Feedback only accumulates; it is never pruned,
//! and the loop does not regenerate the summary from it.

use serde::Deserialize;
use tracing::{info, warn};

use crate::agents::client::{AgentClient, AgentKind};
use crate::models::AnalysisState;
use crate::types::AppResult;

/// Terminal state of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionOutcome {
    /// A critique call yielded nothing beyond what was already recorded.
    Converged,
    /// The iteration cap was reached with feedback still arriving.
    Exhausted,
}

#[derive(Debug, Default, Deserialize)]
struct CritiqueResponse {
    #[serde(default)]
    reflection_feedback: Vec<String>,
}

pub struct ReflectionLoop;

impl ReflectionLoop {
    pub async fn run(
        client: &dyn AgentClient,
        state: &mut AnalysisState,
    ) -> AppResult<ReflectionOutcome> {
        while state.reflection_iteration < state.max_reflection_iterations {
            let payload = serde_json::to_value(&*state)?;
            let response = client.call(AgentKind::Critique, payload).await?;
            let feedback = Self::parse_feedback(response);

            if feedback.is_empty() || feedback == state.reflection_feedback {
                info!(iteration = state.reflection_iteration, "Reflection converged");
                return Ok(ReflectionOutcome::Converged);
            }

            // Append only what is new, by exact string match.
            let mut fresh = Vec::new();
            for item in feedback {
                if !state.reflection_feedback.contains(&item) && !fresh.contains(&item) {
                    fresh.push(item);
                }
            }
            state.reflection_feedback.append(&mut fresh);
            state.reflection_iteration += 1;
        }

        info!(
            iterations = state.reflection_iteration,
            "Reflection iteration cap reached"
        );
        Ok(ReflectionOutcome::Exhausted)
    }

    /// A critique response that is not well-formed counts as "no feedback",
    /// unlike every other agent where a malformed body is fatal.
    fn parse_feedback(response: serde_json::Value) -> Vec<String> {
        match serde_json::from_value::<CritiqueResponse>(response) {
            Ok(parsed) => parsed.reflection_feedback,
            Err(e) => {
                warn!(error = %e, "Ignoring malformed critique response");
                Vec::new()
            }
        }
    }
}
