//! Request and result types shared by the callable and webhook entry points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// The discriminator selecting a generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Resume,
    CoverLetter,
    InterviewQuestions,
    LinkedinReview,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Resume => "resume",
            ContentType::CoverLetter => "coverLetter",
            ContentType::InterviewQuestions => "interviewQuestions",
            ContentType::LinkedinReview => "linkedinReview",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = AppError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "resume" => Ok(ContentType::Resume),
            "coverLetter" => Ok(ContentType::CoverLetter),
            "interviewQuestions" => Ok(ContentType::InterviewQuestions),
            "linkedinReview" => Ok(ContentType::LinkedinReview),
            other => Err(AppError::UnknownContentType(other.to_string())),
        }
    }
}

/// Loose, caller-supplied fields. Which ones matter depends on the content type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFields {
    pub prompt: Option<String>,
    pub template: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub resume_content: Option<String>,
    #[serde(rename = "profileURL", alias = "profileUrl")]
    pub profile_url: Option<String>,
}

/// Body of the authenticated call: a discriminator plus the loose fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentPayload {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    #[serde(flatten)]
    pub fields: ContentFields,
}

/// A validated request with exactly the fields its pipeline interpolates.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRequest {
    Resume {
        prompt: String,
        template: String,
    },
    CoverLetter {
        company: String,
        position: String,
        resume_content: String,
        template: String,
    },
    InterviewQuestions {
        position: String,
        company: String,
    },
    LinkedinReview {
        profile_url: String,
    },
}

impl ContentRequest {
    /// Picks the fields `content_type` needs, failing on the first missing or blank one.
    pub fn from_fields(content_type: ContentType, fields: ContentFields) -> Result<Self, AppError> {
        let ContentFields {
            prompt,
            template,
            company,
            position,
            resume_content,
            profile_url,
        } = fields;

        Ok(match content_type {
            ContentType::Resume => ContentRequest::Resume {
                prompt: required("prompt", prompt)?,
                template: required("template", template)?,
            },
            ContentType::CoverLetter => ContentRequest::CoverLetter {
                company: required("company", company)?,
                position: required("position", position)?,
                resume_content: required("resumeContent", resume_content)?,
                template: required("template", template)?,
            },
            ContentType::InterviewQuestions => ContentRequest::InterviewQuestions {
                position: required("position", position)?,
                company: required("company", company)?,
            },
            ContentType::LinkedinReview => ContentRequest::LinkedinReview {
                profile_url: required("profileURL", profile_url)?,
            },
        })
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            ContentRequest::Resume { .. } => ContentType::Resume,
            ContentRequest::CoverLetter { .. } => ContentType::CoverLetter,
            ContentRequest::InterviewQuestions { .. } => ContentType::InterviewQuestions,
            ContentRequest::LinkedinReview { .. } => ContentType::LinkedinReview,
        }
    }
}

impl TryFrom<GenerateContentPayload> for ContentRequest {
    type Error = AppError;

    fn try_from(payload: GenerateContentPayload) -> Result<Self, Self::Error> {
        let content_type: ContentType = payload.content_type.as_deref().unwrap_or("").parse()?;
        ContentRequest::from_fields(content_type, payload.fields)
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::MissingField(name)),
    }
}

/// Generated resume: the parsed object, or the raw text when it did not parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResumeContent {
    Structured(Map<String, Value>),
    RawText(String),
}

/// The outward result of one pipeline run. Shape is fixed by the content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Resume { content: ResumeContent },
    CoverLetter { content: String },
    InterviewQuestions { questions: Vec<String> },
    LinkedinReview { review: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> GenerateContentPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_content_type_round_trips_through_tag() {
        for ct in [
            ContentType::Resume,
            ContentType::CoverLetter,
            ContentType::InterviewQuestions,
            ContentType::LinkedinReview,
        ] {
            assert_eq!(ct.as_str().parse::<ContentType>().unwrap(), ct);
        }
    }

    #[test]
    fn test_unknown_content_type_is_invalid_argument() {
        let err = "poem".parse::<ContentType>().unwrap_err();
        assert!(matches!(err, AppError::UnknownContentType(ref t) if t == "poem"));
    }

    #[test]
    fn test_missing_type_is_unknown_content_type() {
        let err = ContentRequest::try_from(payload(json!({"prompt": "hi"}))).unwrap_err();
        assert!(matches!(err, AppError::UnknownContentType(_)));
    }

    #[test]
    fn test_cover_letter_payload_uses_camel_case_fields() {
        let request = ContentRequest::try_from(payload(json!({
            "type": "coverLetter",
            "company": "Acme",
            "position": "Backend Engineer",
            "resumeContent": "Built payment systems in Rust",
            "template": "Modern"
        })))
        .unwrap();

        assert_eq!(
            request,
            ContentRequest::CoverLetter {
                company: "Acme".to_string(),
                position: "Backend Engineer".to_string(),
                resume_content: "Built payment systems in Rust".to_string(),
                template: "Modern".to_string(),
            }
        );
        assert_eq!(request.content_type(), ContentType::CoverLetter);
    }

    #[test]
    fn test_linkedin_review_reads_profile_url() {
        let request = ContentRequest::try_from(payload(json!({
            "type": "linkedinReview",
            "profileURL": "https://www.linkedin.com/in/jane"
        })))
        .unwrap();
        assert_eq!(
            request,
            ContentRequest::LinkedinReview {
                profile_url: "https://www.linkedin.com/in/jane".to_string()
            }
        );
    }

    #[test]
    fn test_blank_required_field_fails_fast() {
        let err = ContentRequest::try_from(payload(json!({
            "type": "interviewQuestions",
            "position": "SRE",
            "company": "   "
        })))
        .unwrap_err();
        assert!(matches!(err, AppError::MissingField("company")));
    }

    #[test]
    fn test_result_shapes() {
        let resume = GenerationResult::Resume {
            content: ResumeContent::RawText("plain".to_string()),
        };
        assert_eq!(serde_json::to_value(&resume).unwrap(), json!({"content": "plain"}));

        let questions = GenerationResult::InterviewQuestions {
            questions: vec!["Why us?".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&questions).unwrap(),
            json!({"questions": ["Why us?"]})
        );

        let review = GenerationResult::LinkedinReview {
            review: "Solid".to_string(),
        };
        assert_eq!(serde_json::to_value(&review).unwrap(), json!({"review": "Solid"}));
    }
}
