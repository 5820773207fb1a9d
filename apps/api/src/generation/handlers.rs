//! Axum route handler for the authenticated generation call.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::generation::models::{ContentRequest, GenerateContentPayload, GenerationResult};
use crate::generation::pipeline::generate_content;
use crate::state::AppState;

/// Callable request envelope: `{"data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct CallableRequest<T> {
    #[serde(default)]
    pub data: T,
}

/// Callable success envelope: `{"result": ...}`.
#[derive(Debug, Serialize)]
pub struct CallableResponse<T> {
    pub result: T,
}

/// POST /api/v1/generate
///
/// Requires a verified caller, checked before the body is looked at.
/// Unreadable body or unknown `type` → INVALID_ARGUMENT,
/// backend failure → INTERNAL with the underlying message.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    caller: Option<CallerIdentity>,
    body: Result<Json<CallableRequest<GenerateContentPayload>>, JsonRejection>,
) -> Result<Json<CallableResponse<GenerationResult>>, AppError> {
    let caller = caller.ok_or(AppError::Unauthenticated)?;
    let Json(request) = body.map_err(|e| AppError::MalformedBody(e.body_text()))?;

    let content_request = ContentRequest::try_from(request.data)?;
    info!(
        "Content generation requested: type={} user={}",
        content_request.content_type(),
        caller.uid
    );

    let result = generate_content(state.llm.as_ref(), &content_request).await?;

    Ok(Json(CallableResponse { result }))
}
