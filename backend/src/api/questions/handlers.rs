//! Handler functions for the question API.
//!
//! These map the wire contract (camelCase keys, fixed response envelopes)
//! onto the query and mutation services.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{ApiJson, AppState};
use crate::database::models::{Category, NewQuestion, Question};
use crate::errors::ApiError;
use crate::services::DeleteError;

#[derive(Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub status: u16,
}

pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = state.query.question_page(params.page.unwrap_or(1)).await?;
    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories: page.categories,
        status: 200,
    }))
}

#[derive(Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub message: String,
    pub question: Question,
}

pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewQuestion>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let question = state
        .mutation
        .create_question(new)
        .await
        .map_err(ApiError::InsertRejected)?;
    Ok(Json(CreateQuestionResponse {
        success: true,
        message: "A new question has been created".into(),
        question,
    }))
}

#[derive(Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub message: String,
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    state
        .mutation
        .delete_question(question_id)
        .await
        .map_err(|err| match err {
            DeleteError::NotFound(_) => ApiError::QuestionNotFound,
            DeleteError::Store(err) => ApiError::DeleteFailed(err),
        })?;
    // Message kept verbatim from the original contract.
    Ok(Json(DeleteQuestionResponse {
        success: true,
        message: "Successfully delete question".into(),
    }))
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

pub async fn search_questions(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let questions = state.query.search(&request.search_term).await?;
    let total_questions = questions.len();
    Ok(Json(SearchResponse {
        questions,
        total_questions,
    }))
}
