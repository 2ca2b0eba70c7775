//! Central module for organizing the application's main API endpoints.
//!
//! Each domain (categories, questions, quizzes) contributes its own router;
//! this module assembles them, carries the shared [`AppState`], and wires
//! the fallback and middleware layers.

pub mod categories;
pub mod questions;
pub mod quizzes;

use std::sync::Arc;

use axum::extract::FromRequest;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::database::{CategoryStore, QuestionStore};
use crate::errors::{self, ApiError};
use crate::middleware;
use crate::services::{MutationService, QueryService, QuizSelector};

/// Shared handler state: one service per concern, all backed by the same
/// store implementations.
#[derive(Clone)]
pub struct AppState {
    pub query: QueryService,
    pub mutation: MutationService,
    pub quiz: QuizSelector,
}

impl AppState {
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            query: QueryService::new(questions.clone(), categories),
            mutation: MutationService::new(questions.clone()),
            quiz: QuizSelector::new(questions),
        }
    }
}

/// JSON extractor whose rejection maps onto the legacy 422 body instead of
/// Axum's default plain-text response.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(categories::routes::router())
        .merge(questions::routes::router())
        .merge(quizzes::routes::router())
        .fallback(errors::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}
