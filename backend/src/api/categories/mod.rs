//! Module for the category API.
//!
//! Categories are read-only: the endpoints list them and filter questions
//! by category reference.

pub mod handlers;
pub mod routes;
