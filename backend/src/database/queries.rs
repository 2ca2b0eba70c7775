//! Database query functions (Data Access Objects).
//!
//! Postgres-backed implementations of the store contracts. All queries are
//! bound at runtime against a shared [`PgPool`], keeping the query logic
//! out of the services and API handlers.

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

use super::models::{Category, NewQuestion, Question};
use super::{CategoryStore, QuestionStore};
use crate::errors::StoreError;

#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn page(&self, offset: i64, limit: i64) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions \
             ORDER BY id OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions \
             WHERE question ILIKE $1 ORDER BY id",
        )
        .bind(format!("%{term}%"))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn by_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        let rows = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions \
             WHERE category = $1 ORDER BY id",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, difficulty, category) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, question, answer, difficulty, category",
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(&self.pool)
        .await
        .map_err(into_insert_error)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// A NULL bound into a NOT NULL column is the store-level signal for a
// missing required field.
fn into_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if matches!(
            db.kind(),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation
        ) {
            return StoreError::Constraint(db.to_string());
        }
    }
    StoreError::Database(err)
}

#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
