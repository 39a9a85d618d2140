use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), Some(vec![msg])),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Unauthorized(msg) => {
                tracing::warn!("Rejected credentials: {}", msg);
                (StatusCode::UNAUTHORIZED, msg, None)
            }
            AppError::Forbidden(msg) => {
                tracing::warn!("Rejected moderation request: {}", msg);
                (StatusCode::FORBIDDEN, msg, None)
            }
        };

        (status, Json(ErrorResponse::new(message, errors))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
