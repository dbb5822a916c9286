// Error taxonomy shared across the orchestration pipeline

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("agent '{agent}' call failed: {source}")]
    Transport {
        agent: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("agent '{agent}' returned HTTP {status}: {body}")]
    Upstream {
        agent: &'static str,
        status: u16,
        body: String,
    },

    #[error("agent '{agent}' returned a malformed response: {detail}")]
    Malformed {
        agent: &'static str,
        detail: String,
    },

    #[error("failed to serialize agent payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

// One failing step fails the whole orchestration; the handler surfaces the
// single error message verbatim, FastAPI-style, as a JSON "detail" body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Transport { .. } | AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Malformed { .. } | AppError::Serialize(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
