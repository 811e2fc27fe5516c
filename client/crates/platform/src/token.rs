//! Bearer Token Claims
//!
//! Reads the payload segment of the JWT issued at login. The signature is
//! not checked: the backend is the authority, the client only needs the
//! expiry and the subject for display and session bookkeeping.

use base64::{Engine, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Error when reading token claims
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token is not a three-part JWT")]
    NotJwt,
    #[error("Invalid base64 in token payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Invalid JSON in token payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims issued by the marketplace backend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Claims {
    /// User id as a decimal string
    pub sub: Option<String>,
    pub username: Option<String>,
    pub role: Option<String>,
    /// Expiry, seconds since the epoch
    pub exp: Option<i64>,
    /// Issued-at, seconds since the epoch
    pub iat: Option<i64>,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Decode base64url without padding, tolerating padded input
fn from_base64_url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s.trim_end_matches('='))
}

/// Decode the claims of a JWT
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::NotJwt);
    };
    let bytes = from_base64_url(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Expiry of a JWT, if it has one and can be read
pub fn expires_at(token: &str) -> Option<DateTime<Utc>> {
    match decode_claims(token) {
        Ok(claims) => claims.expires_at(),
        Err(e) => {
            tracing::debug!(error = %e, "Token claims unreadable, no expiry known");
            None
        }
    }
}

#[cfg(test)]
pub(crate) fn test_token(claims_json: &str) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims_json.as_bytes());
    format!("{header}.{payload}.signature")
}
