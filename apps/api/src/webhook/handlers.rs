//! Axum route handler for the public webhook.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::errors::{AppError, ErrorKind};
use crate::generation::models::{ContentFields, ContentRequest, ContentType, GenerationResult};
use crate::generation::pipeline::generate_content;
use crate::state::AppState;

/// Webhook body: `{"type": "...", "data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: ContentFields,
}

/// The two webhook discriminators and their pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookKind {
    ResumeGeneration,
    CoverLetterGeneration,
}

impl WebhookKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "resume_generation" => Some(WebhookKind::ResumeGeneration),
            "cover_letter_generation" => Some(WebhookKind::CoverLetterGeneration),
            _ => None,
        }
    }

    pub fn content_type(self) -> ContentType {
        match self {
            WebhookKind::ResumeGeneration => ContentType::Resume,
            WebhookKind::CoverLetterGeneration => ContentType::CoverLetter,
        }
    }
}

/// Webhook failures. The body is always `{"error": "..."}`.
#[derive(Debug)]
pub enum WebhookError {
    InvalidType(String),
    BadRequest(String),
    Internal(AppError),
}

impl From<AppError> for WebhookError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::InvalidArgument | ErrorKind::Unauthenticated => {
                WebhookError::BadRequest(err.to_string())
            }
            ErrorKind::Internal => WebhookError::Internal(err),
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebhookError::InvalidType(tag) => {
                warn!("Webhook called with unknown type {tag:?}");
                (StatusCode::BAD_REQUEST, "Invalid webhook type".to_string())
            }
            WebhookError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebhookError::Internal(err) => {
                error!("Webhook error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// POST /webhook
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Result<Json<WebhookRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, WebhookError> {
    let Json(request) = body.map_err(|e| {
        warn!("Webhook body rejected: {}", e.body_text());
        WebhookError::BadRequest(e.body_text())
    })?;
    let kind =
        WebhookKind::parse(&request.kind).ok_or(WebhookError::InvalidType(request.kind))?;

    let content_request = ContentRequest::from_fields(kind.content_type(), request.data)?;
    info!("Webhook generation: {:?}", kind);

    let result = generate_content(state.llm.as_ref(), &content_request).await?;

    Ok(Json(result))
}
