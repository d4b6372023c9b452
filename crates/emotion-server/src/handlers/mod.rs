//! HTTP handler modules for the emotion API.
//!
//! Handlers are thin: they validate the request, delegate to the
//! [`ClassificationClient`](crate::classifier::ClassificationClient), and
//! return JSON responses.

pub mod emotion;
pub mod health;
