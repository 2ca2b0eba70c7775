//! Rust structs that represent database table mappings.
//!
//! The wire format matches these field names one-to-one, so the same types
//! serve both as row mappings and as API payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    /// Category reference. Not validated against existing categories;
    /// dangling references are permitted.
    pub category: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Insert payload for a question. All four fields are required; absence is
/// rejected by the store's constraints rather than by handler validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}
