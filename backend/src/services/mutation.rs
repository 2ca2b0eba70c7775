//! Create and delete operations for question records.

use std::sync::Arc;

use thiserror::Error;

use crate::database::models::{NewQuestion, Question};
use crate::database::QuestionStore;
use crate::errors::StoreError;

/// Outcome of a failed delete. The HTTP layer collapses both variants onto
/// the same status code, but callers can still tell them apart.
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("no question with id {0}")]
    NotFound(i32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct MutationService {
    questions: Arc<dyn QuestionStore>,
}

impl MutationService {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    /// Inserts a new question and returns the stored record with its
    /// assigned identifier. Field validation is the store's constraint
    /// check, not ours.
    pub async fn create_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        self.questions.insert(new).await
    }

    /// Deletes a question by identifier. A zero-row delete is the
    /// not-found signal, so there is no lookup/delete race.
    pub async fn delete_question(&self, id: i32) -> Result<(), DeleteError> {
        if self.questions.delete(id).await? {
            Ok(())
        } else {
            Err(DeleteError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;

    #[tokio::test]
    async fn deleting_a_missing_question_is_not_found() {
        let service = MutationService::new(Arc::new(MemoryStore::new()));
        let result = service.delete_question(10_000).await;
        assert!(matches!(result, Err(DeleteError::NotFound(10_000))));
    }

    #[tokio::test]
    async fn a_question_cannot_be_deleted_twice() {
        let store = Arc::new(MemoryStore::new());
        let service = MutationService::new(store);
        let created = service
            .create_question(NewQuestion {
                question: Some("How".to_string()),
                answer: Some("Now".to_string()),
                difficulty: Some(1),
                category: Some(1),
            })
            .await
            .unwrap();

        service.delete_question(created.id).await.unwrap();
        let second = service.delete_question(created.id).await;
        assert!(matches!(second, Err(DeleteError::NotFound(_))));
    }
}
