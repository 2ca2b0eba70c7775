//! Next-question selection for quiz rounds.
//!
//! Selection is deliberately deterministic: the first candidate by
//! ascending identifier wins, so repeated calls with the same exclusion set
//! return the same question. The server keeps no game state; clients grow
//! the exclusion set themselves and resubmit it each round.

use std::sync::Arc;

use crate::database::models::Question;
use crate::database::QuestionStore;
use crate::errors::StoreError;

/// Category value meaning "draw from all categories".
pub const ALL_CATEGORIES: i32 = 0;

/// Picks the next question from `candidates`: not yet asked, matching the
/// requested category unless it is [`ALL_CATEGORIES`], first by the order
/// of `candidates`. `None` means the game is over.
pub fn select_next<'a>(
    candidates: &'a [Question],
    previous: &[i32],
    category: i32,
) -> Option<&'a Question> {
    candidates.iter().find(|question| {
        !previous.contains(&question.id)
            && (category == ALL_CATEGORIES || question.category == category)
    })
}

#[derive(Clone)]
pub struct QuizSelector {
    questions: Arc<dyn QuestionStore>,
}

impl QuizSelector {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    /// Loads the identifier-ordered question list and applies
    /// [`select_next`].
    pub async fn next_question(
        &self,
        previous: &[i32],
        category: i32,
    ) -> Result<Option<Question>, StoreError> {
        let questions = self.questions.all().await?;
        Ok(select_next(&questions, previous, category).cloned())
    }
}
