//! Routes for question listing, creation, deletion, and search.

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{create_question, delete_question, list_questions, search_questions};
use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
}
