//! Generation pipeline: build prompt → one backend call → normalize.
//!
//! Shared by the authenticated call and the webhook. Exactly one backend
//! call per request; a backend failure fails the whole request.

use tracing::info;

use crate::errors::AppError;
use crate::generation::builder::build_prompt;
use crate::generation::models::{ContentRequest, GenerationResult};
use crate::generation::normalizer::normalize;
use crate::llm_client::TextGenerator;

pub async fn generate_content(
    llm: &dyn TextGenerator,
    request: &ContentRequest,
) -> Result<GenerationResult, AppError> {
    let content_type = request.content_type();
    let plan = build_prompt(request);

    info!(
        "Generating {content_type} ({} messages, max_tokens={})",
        plan.messages.len(),
        plan.max_tokens
    );

    let raw = llm
        .complete(&plan)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    info!("Generated {content_type}: {} chars", raw.len());

    Ok(normalize(content_type, raw))
}
