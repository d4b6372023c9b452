//! Health check response type.

use serde::Serialize;

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"online"` while the process is serving.
    pub status: &'static str,
    /// Configured model identifier.
    pub model: String,
    pub message: &'static str,
}

impl HealthResponse {
    pub fn online(model: &str) -> Self {
        HealthResponse {
            status: "online",
            model: model.to_string(),
            message: "API is ready to receive requests at /detect_emotion",
        }
    }
}
