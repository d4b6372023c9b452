//! Health check handler.

use axum::extract::State;
use axum::Json;

use crate::schema::health::HealthResponse;
use crate::state::AppState;

/// `GET /`
///
/// Static status; never contacts the upstream.
pub async fn home(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::online(state.classifier.model()))
}
