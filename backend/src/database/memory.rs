//! In-memory store used by the test suite and for running without Postgres.
//!
//! A single `MemoryStore` implements both store contracts. Questions live in
//! a `BTreeMap`, so enumeration order is identifier order, matching the
//! Postgres stores' `ORDER BY id`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::models::{Category, NewQuestion, Question};
use super::{CategoryStore, QuestionStore};
use crate::errors::StoreError;

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    questions: BTreeMap<i32, Question>,
    categories: BTreeMap<i32, Category>,
    next_question_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given categories, identifiers
    /// assigned in order starting at 1.
    pub fn with_categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        {
            let mut inner = store.locked();
            for (index, name) in names.into_iter().enumerate() {
                let id = index as i32 + 1;
                inner.categories.insert(
                    id,
                    Category {
                        id,
                        name: name.into(),
                    },
                );
            }
        }
        store
    }

    fn locked(&self) -> MutexGuard<'_, Inner> {
        // Lock poisoning only happens after a panic in another test thread.
        self.inner.lock().unwrap()
    }
}

fn missing(field: &str) -> StoreError {
    StoreError::Constraint(format!("null value in column \"{field}\""))
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.locked().questions.values().cloned().collect())
    }

    async fn page(&self, offset: i64, limit: i64) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .locked()
            .questions
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.locked().questions.len() as i64)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .locked()
            .questions
            .values()
            .filter(|question| question.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn by_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .locked()
            .questions
            .values()
            .filter(|question| question.category == category)
            .cloned()
            .collect())
    }

    async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let question = new.question.ok_or_else(|| missing("question"))?;
        let answer = new.answer.ok_or_else(|| missing("answer"))?;
        let difficulty = new.difficulty.ok_or_else(|| missing("difficulty"))?;
        let category = new.category.ok_or_else(|| missing("category"))?;

        let mut inner = self.locked();
        inner.next_question_id += 1;
        let id = inner.next_question_id;
        let record = Question {
            id,
            question,
            answer,
            difficulty,
            category,
        };
        inner.questions.insert(id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.locked().questions.remove(&id).is_some())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.locked().categories.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion {
            question: Some(text.to_string()),
            answer: Some("answer".to_string()),
            difficulty: Some(1),
            category: Some(category),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let first = store.insert(new_question("a", 1)).await.unwrap();
        let second = store.insert(new_question("b", 1)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn insert_rejects_missing_fields() {
        let store = MemoryStore::new();
        let result = store
            .insert(NewQuestion {
                question: Some("a".to_string()),
                ..NewQuestion::default()
            })
            .await;
        assert!(matches!(result, Err(StoreError::Constraint(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.insert(new_question("a", 1)).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());
        let second = store.insert(new_question("b", 1)).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_no_match() {
        let store = MemoryStore::new();
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_on_question_text_only() {
        let store = MemoryStore::new();
        let kept = store.insert(new_question("How are you", 1)).await.unwrap();
        store
            .insert(NewQuestion {
                question: Some("What time is it".to_string()),
                answer: Some("how should I know".to_string()),
                difficulty: Some(1),
                category: Some(1),
            })
            .await
            .unwrap();

        let found = store.search("how").await.unwrap();
        assert_eq!(found, vec![kept]);
        assert_eq!(store.search("").await.unwrap().len(), 2);
    }
}
