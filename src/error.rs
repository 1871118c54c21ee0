//! Error types for courtside

use reqwest::StatusCode;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, CourtsideError>;

#[derive(Error, Debug)]
pub enum CourtsideError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Upstream API unreachable: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),

    #[error("Upstream API returned status {status} for {endpoint}")]
    UpstreamStatus { status: StatusCode, endpoint: String },

    #[error("Upstream API returned invalid JSON for {endpoint}: {source}")]
    UpstreamPayload {
        endpoint: String,
        source: serde_json::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl CourtsideError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CourtsideError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// True for every failure that originates at the statistics API, whether the
    /// request never completed, came back with a bad status, or carried a bad body.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CourtsideError::UpstreamUnreachable(_)
                | CourtsideError::UpstreamStatus { .. }
                | CourtsideError::UpstreamPayload { .. }
        )
    }

    /// Machine-readable error kind used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            CourtsideError::InvalidInput { .. } => "invalid_input",
            CourtsideError::UpstreamUnreachable(_) => "upstream_unreachable",
            CourtsideError::UpstreamStatus { .. } => "upstream_status",
            CourtsideError::UpstreamPayload { .. } => "upstream_payload",
            CourtsideError::Json(_)
            | CourtsideError::InvalidHeader(_)
            | CourtsideError::Io(_)
            | CourtsideError::Template(_) => "internal_error",
        }
    }
}
