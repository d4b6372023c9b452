//! Error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for the API endpoints. It implements
//! `axum::response::IntoResponse` to produce `{"error": ...}` JSON bodies.
//! [`ClassifierError`] covers the outbound inference call and
//! [`ConfigError`] covers startup.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Caller sent an unusable request (400).
    #[error("{0}")]
    Validation(String),

    /// Classification failed for any reason on our side or upstream (500).
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Failures of the outbound classification call.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Transport-level failure: connect, TLS, or reading the body.
    #[error("inference request failed")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("inference request failed ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Upstream body did not have the expected label/score shape.
    #[error("could not parse model output: {0}")]
    MalformedResponse(String),
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        ApiError::Upstream(error_chain(&err))
    }
}

/// Renders an error and each of its sources as `err: cause: cause`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HUGGINGFACE_API_KEY environment variable not set")]
    MissingCredential,

    #[error("invalid PORT '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),

    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
