//! Emotion detection handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::{error_chain, ApiError};
use crate::schema::emotion::{DetectEmotionRequest, DetectEmotionResponse, NOT_JSON};
use crate::state::AppState;

/// `POST /detect_emotion`
pub async fn detect_emotion(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DetectEmotionResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected non-JSON body");
        ApiError::Validation(NOT_JSON.to_string())
    })?;
    let req = DetectEmotionRequest::from_json(body)?;

    let result = state.classifier.classify(&req.text).await.map_err(|err| {
        tracing::warn!(error = %error_chain(&err), "classification failed");
        ApiError::from(err)
    })?;

    tracing::debug!(label = %result.label, score = ?result.score, "classified text");

    Ok(Json(DetectEmotionResponse {
        emotion: result.label,
    }))
}
