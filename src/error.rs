use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::RecommendError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No matches: {0}")]
    EmptyResult(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RecommendError> for AppError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::TitleNotFound(_) => AppError::NotFound(err.to_string()),
            RecommendError::NoMatches { .. } => AppError::EmptyResult(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) | AppError::EmptyResult(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
