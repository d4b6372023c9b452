//! Binary entrypoint for the emotion HTTP server.
//!
//! Configuration comes from environment variables; see [`emotion_server::config`].
//! A missing `HUGGINGFACE_API_KEY` stops the process before it binds.

use std::process;

use emotion_server::config::Config;
use emotion_server::router::build_router;
use emotion_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {}", e);
            process::exit(1);
        }
    };

    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("failed to initialize application state: {}", e);
            process::exit(1);
        }
    };

    let app = build_router(state, &config.cors);

    let addr = config.bind_addr();
    tracing::info!(model = %config.model, "emotion server starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
        process::exit(1);
    }
}
