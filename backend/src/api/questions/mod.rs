//! Module for the question API.
//!
//! Covers the paginated listing, creation, deletion, and text search of
//! question records.

pub mod handlers;
pub mod routes;
