//! Library crate for the trivia backend.
//!
//! Exposes the configuration, persistence, service, and HTTP layers so the
//! binary and the integration tests can assemble the same application.

pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
