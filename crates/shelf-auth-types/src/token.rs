//! JWT access tokens.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Access-token JWT lifetime in seconds (4 hours).
pub const ACCESS_TOKEN_EXP: u64 = 14400;

/// User identity extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub user_id: i32,
    pub access_token_exp: u64,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing,
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user id as a decimal string |
/// | `exp` | `exp` | expiration, seconds since UNIX epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: u64,
}

#[cfg(any(feature = "issuer", test))]
fn now_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a bearer token, returning the parsed identity.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        access_token_exp: claims.exp,
    })
}

/// Sign an access token for `user_id`. Returns the token and its expiry.
///
/// Requires the `issuer` feature; only the accounts owner signs tokens.
#[cfg(any(feature = "issuer", test))]
pub fn issue_access_token(user_id: i32, secret: &str) -> Result<(String, u64), AuthError> {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = JwtClaims {
        sub: user_id.to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "jwt encode failed");
        AuthError::Signing
    })?;
    Ok((token, exp))
}
