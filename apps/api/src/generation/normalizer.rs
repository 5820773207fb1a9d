//! Response Normalizer — reshapes the raw completion text per content type.
//!
//! Parsing is strict: text that is not valid JSON as a whole (including
//! fenced JSON) takes the fallback path for its content type.

use serde_json::Value;
use tracing::{debug, warn};

use crate::generation::models::{ContentType, GenerationResult, ResumeContent};
use crate::generation::prompts::RESUME_SECTIONS;

/// Cap on questions recovered by the line-based fallback.
pub const MAX_FALLBACK_QUESTIONS: usize = 10;

pub fn normalize(content_type: ContentType, raw: String) -> GenerationResult {
    match content_type {
        ContentType::Resume => GenerationResult::Resume {
            content: normalize_resume(raw),
        },
        ContentType::CoverLetter => GenerationResult::CoverLetter { content: raw },
        ContentType::InterviewQuestions => GenerationResult::InterviewQuestions {
            questions: normalize_questions(&raw),
        },
        ContentType::LinkedinReview => GenerationResult::LinkedinReview { review: raw },
    }
}

/// A JSON object becomes the structured resume; anything else is passed through as text.
pub fn normalize_resume(raw: String) -> ResumeContent {
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => {
            let missing: Vec<&str> = RESUME_SECTIONS
                .iter()
                .copied()
                .filter(|section| !map.contains_key(*section))
                .collect();
            if !missing.is_empty() {
                warn!("Structured resume is missing sections: {}", missing.join(", "));
            }
            ResumeContent::Structured(map)
        }
        Ok(_) => {
            debug!("Resume output parsed as non-object JSON; returning raw text");
            ResumeContent::RawText(raw)
        }
        Err(_) => ResumeContent::RawText(raw),
    }
}

/// JSON array → its items; other JSON → one-element list; non-JSON → line fallback.
pub fn normalize_questions(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items.into_iter().map(question_text).collect(),
        Ok(Value::String(single)) => vec![single],
        Ok(_) => vec![raw.trim().to_string()],
        Err(_) => {
            debug!("Interview questions were not JSON; splitting lines");
            split_question_lines(raw)
        }
    }
}

fn question_text(item: Value) -> String {
    match item {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn split_question_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('-') && !line.starts_with('*'))
        .take(MAX_FALLBACK_QUESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_question_list_is_returned_verbatim() {
        let questions: Vec<String> = (1..=10).map(|i| format!("Question {i}?")).collect();
        let raw = serde_json::to_string(&questions).unwrap();
        assert_eq!(normalize_questions(&raw), questions);
    }

    #[test]
    fn test_json_list_longer_than_ten_is_not_truncated() {
        let questions: Vec<String> = (1..=12).map(|i| format!("Q{i}")).collect();
        let raw = serde_json::to_string(&questions).unwrap();
        assert_eq!(normalize_questions(&raw).len(), 12);
    }

    #[test]
    fn test_fallback_drops_blank_and_bullet_lines() {
        let raw = "1. What is X?\n- ignore me\n\n2. Describe Y";
        assert_eq!(
            normalize_questions(raw),
            vec!["1. What is X?".to_string(), "2. Describe Y".to_string()]
        );
    }

    #[test]
    fn test_fallback_trims_and_drops_star_bullets() {
        let raw = "Here are your questions:\r\n   * Technical\n  3. Why Rust?  \n";
        assert_eq!(
            normalize_questions(raw),
            vec!["Here are your questions:".to_string(), "3. Why Rust?".to_string()]
        );
    }

    #[test]
    fn test_fallback_caps_at_ten() {
        let raw = (1..=14)
            .map(|i| format!("{i}. Question number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let questions = normalize_questions(&raw);
        assert_eq!(questions.len(), MAX_FALLBACK_QUESTIONS);
        assert_eq!(questions[0], "1. Question number 1");
        assert_eq!(questions[9], "10. Question number 10");
    }

    #[test]
    fn test_fallback_returns_fewer_without_padding() {
        let questions = normalize_questions("Only one question?\n");
        assert_eq!(questions, vec!["Only one question?".to_string()]);
    }

    #[test]
    fn test_non_list_json_is_wrapped() {
        assert_eq!(
            normalize_questions("\"Tell me about yourself\""),
            vec!["Tell me about yourself".to_string()]
        );
        assert_eq!(
            normalize_questions(r#"{"q": "Why?"}"#),
            vec![r#"{"q": "Why?"}"#.to_string()]
        );
    }

    #[test]
    fn test_resume_json_object_is_structured() {
        let value = json!({
            "personalInfo": {"fullName": "Jane Doe", "email": "jane@example.com"},
            "experience": [{"company": "Acme", "position": "Engineer", "isCurrent": true}],
            "education": [],
            "skills": [{"name": "Rust", "level": "Expert"}],
            "projects": [],
            "certifications": [],
            "languages": [{"name": "English", "proficiency": "Native"}]
        });
        let raw = value.to_string();

        match normalize_resume(raw) {
            ResumeContent::Structured(map) => assert_eq!(Value::Object(map), value),
            other => panic!("expected structured resume, got {other:?}"),
        }
    }

    #[test]
    fn test_resume_plain_text_passes_through() {
        let raw = "JANE DOE\nSenior Engineer\n\nExperience: ...".to_string();
        assert_eq!(normalize_resume(raw.clone()), ResumeContent::RawText(raw));
    }

    #[test]
    fn test_resume_fenced_json_is_not_parsed() {
        let raw = "```json\n{\"personalInfo\": {}}\n```".to_string();
        assert_eq!(normalize_resume(raw.clone()), ResumeContent::RawText(raw));
    }

    #[test]
    fn test_cover_letter_and_review_are_untouched() {
        let letter = "Dear Hiring Manager,\n\n{not json".to_string();
        assert_eq!(
            normalize(ContentType::CoverLetter, letter.clone()),
            GenerationResult::CoverLetter { content: letter }
        );

        let review = "[1] Profile completeness: good".to_string();
        assert_eq!(
            normalize(ContentType::LinkedinReview, review.clone()),
            GenerationResult::LinkedinReview { review }
        );
    }
}
