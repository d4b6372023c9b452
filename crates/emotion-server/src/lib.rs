//! HTTP relay that classifies user text through a hosted inference model.
//!
//! The server hides the inference credential from callers and exposes one
//! simplified endpoint, `POST /detect_emotion`, plus a health check at `/`.
//! This crate contains configuration loading, the outbound classification
//! client, API schema types, error handling, and route definitions.

pub mod classifier;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
