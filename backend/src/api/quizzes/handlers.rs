//! Handler for quiz rounds: pick the next not-yet-asked question.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{ApiJson, AppState};
use crate::database::models::Question;
use crate::errors::ApiError;

#[derive(Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    #[serde(default)]
    pub quiz_category: QuizCategory,
}

/// Category selector for a quiz round; id 0 means "all categories".
#[derive(Deserialize, Default)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: i32,
}

/// `question` is `null` once every candidate has been asked; clients treat
/// that as end of game, not as an error.
#[derive(Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

pub async fn play_quiz(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let question = state
        .quiz
        .next_question(&request.previous_questions, request.quiz_category.id)
        .await?;
    Ok(Json(QuizResponse { question }))
}
