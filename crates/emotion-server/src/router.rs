//! Router assembly for the emotion HTTP API.
//!
//! [`build_router`] wires the handlers to their routes with CORS and tracing
//! middleware layers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsPolicy;
use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// TraceLayer provides request-level logging via tracing. Request bodies
/// have no size cap; any text is forwarded upstream.
pub fn build_router(state: AppState, cors: &CorsPolicy) -> Router {
    Router::new()
        .route("/", get(handlers::health::home))
        .route("/detect_emotion", post(handlers::emotion::detect_emotion))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Translates the configured policy into a CORS middleware layer.
pub fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::Permissive => CorsLayer::permissive(),
        CorsPolicy::AllowList(origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins.iter().cloned()))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    }
}
