//! Module for database connection setup and store contracts.
//!
//! The `QuestionStore` and `CategoryStore` traits are the seams between the
//! services and the storage backend. Production uses the Postgres stores in
//! [`queries`]; the test suite (and database-free local runs) uses
//! [`memory`].

pub mod memory;
pub mod models;
pub mod queries;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::errors::StoreError;
use models::{Category, NewQuestion, Question};

/// Read/write access to question records.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, ordered by ascending identifier.
    async fn all(&self) -> Result<Vec<Question>, StoreError>;

    /// A slice of the ordered question list.
    async fn page(&self, offset: i64, limit: i64) -> Result<Vec<Question>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;

    /// Case-insensitive substring match on question text only. An empty
    /// term matches every question.
    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Questions whose category reference equals `category`, ordered by
    /// identifier. Unknown categories yield an empty list.
    async fn by_category(&self, category: i32) -> Result<Vec<Question>, StoreError>;

    /// Inserts a record, assigning a fresh identifier. A missing required
    /// field surfaces as [`StoreError::Constraint`].
    async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Deletes by identifier. Returns `false` when no row matched.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

/// Read access to category records. Categories are read-only in this API.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories, ordered by ascending identifier.
    async fn all(&self) -> Result<Vec<Category>, StoreError>;
}

/// Connects a Postgres pool and runs the embedded migrations.
pub async fn connect(database_url: &str) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|err| StoreError::Migration(err.to_string()))?;

    Ok(pool)
}
