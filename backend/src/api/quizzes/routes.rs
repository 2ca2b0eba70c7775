//! Route for quiz rounds.

use axum::routing::post;
use axum::Router;

use super::handlers::play_quiz;
use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
