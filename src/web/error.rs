use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::CourtsideError;

/// HTTP status for an error: bad input is the caller's fault, upstream
/// trouble is a bad gateway, anything else is ours.
pub fn status_for(err: &CourtsideError) -> StatusCode {
    match err {
        CourtsideError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        e if e.is_upstream() => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_error(err: &CourtsideError) {
    match status_for(err) {
        StatusCode::BAD_REQUEST => tracing::debug!(error = %err, "rejected request"),
        StatusCode::BAD_GATEWAY => tracing::warn!(error = %err, "upstream failure"),
        _ => tracing::error!(error = %err, "request failed"),
    }
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// API-layer error type
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// 404 for a valid request with nothing to show (`no_match`, `no_stats`, `empty_page`).
    pub fn not_found(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody {
                error,
                message: message.into(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<CourtsideError> for ApiError {
    fn from(err: CourtsideError) -> Self {
        log_error(&err);
        Self {
            status: status_for(&err),
            body: ErrorBody {
                error: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Template)]
#[template(path = "message.html")]
pub(super) struct MessagePage {
    pub title: String,
    pub message: String,
}

/// HTML-layer error: renders the message page with the mapped status code.
#[derive(Debug)]
pub struct PageError(pub CourtsideError);

impl From<CourtsideError> for PageError {
    fn from(err: CourtsideError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        log_error(&self.0);
        let status = status_for(&self.0);
        let page = MessagePage {
            title: "Error".to_string(),
            message: format!("Error: {}", self.0),
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (status, page.message).into_response()
            }
        }
    }
}
