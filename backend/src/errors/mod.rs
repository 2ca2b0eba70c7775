//! Global application error types and handlers.
//!
//! `StoreError` covers the persistence layer; `ApiError` is the HTTP
//! boundary type that maps every failure onto the wire contract, including
//! the legacy 404/422 fallback bodies this API keeps for compatibility.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A column constraint was violated, e.g. a required field was absent.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Schema migration failed on startup.
    #[error("migration failed: {0}")]
    Migration(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors surfaced at the HTTP boundary.
///
/// The delete path keeps `QuestionNotFound` and `DeleteFailed` as distinct
/// variants even though the external contract collapses both onto a 400.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("question not found")]
    QuestionNotFound,

    #[error("could not create question: {0}")]
    InsertRejected(StoreError),

    #[error("could not delete question: {0}")]
    DeleteFailed(StoreError),

    #[error("unprocessable request body")]
    Unprocessable,

    #[error(transparent)]
    Internal(#[from] StoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(_: JsonRejection) -> Self {
        ApiError::Unprocessable
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::QuestionNotFound => bad_request("question not found"),
            ApiError::InsertRejected(err) => {
                tracing::debug!("insert rejected: {err}");
                bad_request("could not create question")
            }
            ApiError::DeleteFailed(err) => {
                tracing::debug!("delete failed: {err}");
                bad_request("could not delete question")
            }
            ApiError::Unprocessable => unprocessable(),
            ApiError::Internal(err) => {
                tracing::error!("store failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": 500,
                        "message": "internal server error",
                    })),
                )
                    .into_response()
            }
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "error": 400,
            "message": message,
        })),
    )
        .into_response()
}

// Legacy 422 body, typo included. `success: true` on an error response is a
// quirk of the original contract that clients depend on.
fn unprocessable() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "success": true,
            "error": 422,
            "message": "unprocesseable",
        })),
    )
        .into_response()
}

/// Fallback handler for unknown routes, carrying the same `success: true`
/// quirk as the 422 body.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": true,
            "error": 404,
            "message": "Not Found",
        })),
    )
        .into_response()
}
