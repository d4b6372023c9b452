//! Client for the hosted text-classification inference endpoint.

use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{ClassifierError, ConfigError};

/// Top label returned by the model for one input.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    pub score: Option<f64>,
}

/// Sends text to `{inference_url}/{model}` and reads back the first label.
///
/// Built once at startup; the inner `reqwest::Client` pools connections across
/// requests. Every call goes upstream, nothing is cached or retried.
#[derive(Clone)]
pub struct ClassificationClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ClassificationClient {
    /// Builds the HTTP client and endpoint URL from the startup config.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("emotion-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(ClassificationClient {
            http,
            endpoint: format!("{}/{}", config.inference_url, config.model),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Model identifier this client classifies with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `text` upstream once and returns the top-ranked label.
    pub async fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifierError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(ClassifierError::Status {
                status,
                body: body_text,
            });
        }

        parse_classification(&body_text)
    }
}

/// Extracts the first label from an inference response body.
///
/// Accepts a flat list of `{label, score}` records, or the batched form where
/// that list is wrapped in an outer list with one entry per input.
pub fn parse_classification(body: &str) -> Result<ClassificationResult, ClassifierError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| ClassifierError::MalformedResponse(format!("invalid JSON: {}", err)))?;

    let records = value
        .as_array()
        .ok_or_else(|| ClassifierError::MalformedResponse("expected a list of labels".to_string()))?;

    let first = match records.first() {
        Some(Value::Array(inner)) => inner.first(),
        other => other,
    }
    .ok_or_else(|| ClassifierError::MalformedResponse("empty response".to_string()))?;

    let record = first.as_object().ok_or_else(|| {
        ClassifierError::MalformedResponse("expected a label record".to_string())
    })?;

    let label = record
        .get("label")
        .and_then(Value::as_str)
        .ok_or_else(|| ClassifierError::MalformedResponse("missing 'label' field".to_string()))?;

    Ok(ClassificationResult {
        label: label.to_string(),
        score: record.get("score").and_then(Value::as_f64),
    })
}
