//! Emotion detection request/response types.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

pub const NOT_JSON: &str = "Request must be JSON";
pub const MISSING_TEXT: &str = "Missing 'text' field in request body";
pub const TEXT_NOT_STRING: &str = "'text' field must be a string";

/// Validated body of `POST /detect_emotion`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectEmotionRequest {
    /// Text to classify. Never empty.
    pub text: String,
}

impl DetectEmotionRequest {
    /// Validates a parsed JSON body.
    ///
    /// `text` must be present and truthy; `null`, `false`, `0`, `""` and
    /// empty containers all count as missing. A truthy non-string is
    /// rejected separately.
    pub fn from_json(body: Value) -> Result<Self, ApiError> {
        let Value::Object(mut fields) = body else {
            return Err(ApiError::Validation(MISSING_TEXT.to_string()));
        };

        match fields.remove("text") {
            Some(Value::String(text)) if !text.is_empty() => Ok(DetectEmotionRequest { text }),
            Some(value) if is_truthy(&value) => {
                Err(ApiError::Validation(TEXT_NOT_STRING.to_string()))
            }
            _ => Err(ApiError::Validation(MISSING_TEXT.to_string())),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Response from a successful classification.
#[derive(Debug, Clone, Serialize)]
pub struct DetectEmotionResponse {
    /// Label of the top-ranked class.
    pub emotion: String,
}
