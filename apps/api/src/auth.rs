//! Caller identity for the authenticated call interface.
//!
//! Token verification happens in the fronting proxy, which forwards the
//! verified user id in `x-authenticated-user-id`. This module only reads it.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

pub const CALLER_ID_HEADER: &str = "x-authenticated-user-id";

/// A verified caller. Use `Option<CallerIdentity>` in handlers that must
/// answer with their own unauthenticated error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub uid: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(CALLER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(|uid| CallerIdentity {
                uid: uid.to_string(),
            })
            .ok_or(AppError::Unauthenticated)
    }
}
