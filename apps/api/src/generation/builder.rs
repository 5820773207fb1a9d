//! Prompt Builder — turns a validated `ContentRequest` into the message list
//! and model parameters for one completion.

use crate::generation::models::{ContentRequest, ContentType};
use crate::generation::prompts::{
    COVER_LETTER_SYSTEM_TEMPLATE, INTERVIEW_QUESTIONS_SYSTEM_TEMPLATE,
    LINKEDIN_REVIEW_SYSTEM_TEMPLATE, RESUME_SYSTEM_TEMPLATE,
};
use crate::llm_client::{ChatMessage, CompletionRequest};

const TEMPERATURE: f32 = 0.7;

/// Output length cap per content type.
pub fn max_tokens_for(content_type: ContentType) -> u32 {
    match content_type {
        ContentType::Resume => 2000,
        ContentType::CoverLetter => 1000,
        ContentType::InterviewQuestions => 1000,
        ContentType::LinkedinReview => 1500,
    }
}

/// Substitutes each `{name}` placeholder in one left-to-right pass.
/// Inserted values are never rescanned; unknown `{...}` spans stay literal.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let known = tail.find('}').and_then(|close| {
            let name = &tail[1..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match known {
            Some((close, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Builds the ordered messages for `request`. Only the resume pipeline sends a user message.
pub fn build_prompt(request: &ContentRequest) -> CompletionRequest {
    let messages = match request {
        ContentRequest::Resume { prompt, template } => vec![
            ChatMessage::system(fill_template(
                RESUME_SYSTEM_TEMPLATE,
                &[("template", template.as_str())],
            )),
            ChatMessage::user(prompt.as_str()),
        ],
        ContentRequest::CoverLetter {
            company,
            position,
            resume_content,
            template,
        } => vec![ChatMessage::system(fill_template(
            COVER_LETTER_SYSTEM_TEMPLATE,
            &[
                ("template", template.as_str()),
                ("company", company.as_str()),
                ("position", position.as_str()),
                ("resume_content", resume_content.as_str()),
            ],
        ))],
        ContentRequest::InterviewQuestions { position, company } => {
            vec![ChatMessage::system(fill_template(
                INTERVIEW_QUESTIONS_SYSTEM_TEMPLATE,
                &[("position", position.as_str()), ("company", company.as_str())],
            ))]
        }
        ContentRequest::LinkedinReview { profile_url } => vec![ChatMessage::system(
            fill_template(LINKEDIN_REVIEW_SYSTEM_TEMPLATE, &[("profile_url", profile_url.as_str())]),
        )],
    };

    CompletionRequest {
        messages,
        temperature: TEMPERATURE,
        max_tokens: max_tokens_for(request.content_type()),
    }
}
