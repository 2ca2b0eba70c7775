//! Handler functions for the category API.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::database::models::{Category, Question};
use crate::errors::ApiError;

#[derive(Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<Category>,
    pub status: u16,
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let categories = state.query.list_categories().await?;
    Ok(Json(CategoryListResponse {
        success: true,
        categories,
        status: 200,
    }))
}

#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
}

/// An unknown category is not an error; it simply has no questions.
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let questions = state.query.by_category(category_id).await?;
    Ok(Json(CategoryQuestionsResponse { questions }))
}
