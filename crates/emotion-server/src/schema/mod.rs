//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization. Inbound bodies are taken
//! as raw JSON values and validated by hand so every malformed shape maps to
//! the same 400 error body.

pub mod emotion;
pub mod health;
