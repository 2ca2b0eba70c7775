//! Routes for category listings and per-category question filters.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_categories, questions_by_category};
use crate::api::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
}
