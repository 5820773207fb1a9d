use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Outward error kinds of the authenticated call interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthenticated,
    InvalidArgument,
    Internal,
}

impl ErrorKind {
    /// Status string used in the callable error body.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("User must be authenticated")]
    Unauthenticated,

    #[error("Invalid content type")]
    UnknownContentType(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    Llm(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("S3 error: {0}")]
    S3(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Unauthenticated => ErrorKind::Unauthenticated,
            AppError::UnknownContentType(_)
            | AppError::MissingField(_)
            | AppError::MalformedBody(_) => ErrorKind::InvalidArgument,
            AppError::Llm(_) | AppError::Database(_) | AppError::S3(_) => ErrorKind::Internal,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match &self {
            AppError::UnknownContentType(tag) => {
                tracing::warn!("Rejected unknown content type {tag:?}");
            }
            AppError::Llm(msg) => tracing::error!("LLM error: {msg}"),
            AppError::Database(e) => tracing::error!("Database error: {e}"),
            AppError::S3(msg) => tracing::error!("S3 error: {msg}"),
            AppError::MalformedBody(msg) => tracing::warn!("Malformed request body: {msg}"),
            AppError::Unauthenticated | AppError::MissingField(_) => {}
        }

        let body = Json(json!({
            "error": {
                "status": kind.as_str(),
                "message": self.to_string()
            }
        }));

        (kind.status_code(), body).into_response()
    }
}
