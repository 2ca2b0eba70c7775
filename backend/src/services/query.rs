//! Read operations: category listings, question pages, search, and
//! per-category filtering.
//!
//! Reads never fail under normal operation; an empty result is always a
//! valid success, never an error.

use std::sync::Arc;

use crate::database::models::{Category, Question};
use crate::database::{CategoryStore, QuestionStore};
use crate::errors::StoreError;

/// Fixed page size for question listings.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// One page of the ordered question list, with the totals the listing
/// endpoint reports alongside it.
#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
}

#[derive(Clone)]
pub struct QueryService {
    questions: Arc<dyn QuestionStore>,
    categories: Arc<dyn CategoryStore>,
}

impl QueryService {
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.categories.all().await
    }

    /// Returns the `page`-th (1-indexed) fixed-size slice of the ordered
    /// question list. Pages past the end are empty, not an error; values
    /// below 1 are clamped to the first page.
    pub async fn question_page(&self, page: u32) -> Result<QuestionPage, StoreError> {
        let offset = i64::from(page.max(1) - 1) * QUESTIONS_PER_PAGE;
        let questions = self.questions.page(offset, QUESTIONS_PER_PAGE).await?;
        let total_questions = self.questions.count().await?;
        let categories = self.categories.all().await?;
        Ok(QuestionPage {
            questions,
            total_questions,
            categories,
        })
    }

    /// Case-insensitive substring search over question text. An empty term
    /// matches every question.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        self.questions.search(term).await
    }

    /// Questions belonging to one category. Unknown categories yield an
    /// empty list, not an error.
    pub async fn by_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        self.questions.by_category(category).await
    }
}
