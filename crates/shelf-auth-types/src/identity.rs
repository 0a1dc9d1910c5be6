//! Bearer-token identity extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;

use crate::token::validate_access_token;

/// HMAC secret used to validate access tokens. Expose it from router state via `FromRef`.
#[derive(Clone)]
pub struct JwtSecret(pub Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Caller identity taken from `Authorization: Bearer <jwt>`.
///
/// Returns 401 if the header is absent, not a bearer token, or fails validation.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = StatusCode;

    // Validation is synchronous; resolve it before building the 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(StatusCode::UNAUTHORIZED)
            .and_then(|token| {
                validate_access_token(token.trim(), secret.as_str()).map_err(|e| {
                    tracing::debug!(error = %e, "rejected bearer token");
                    StatusCode::UNAUTHORIZED
                })
            })
            .map(|info| Self {
                user_id: info.user_id,
            });

        async move { result }
    }
}
