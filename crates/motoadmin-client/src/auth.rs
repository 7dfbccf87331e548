//! Operator auth context.
//!
//! The context is an explicit value built once at startup and injected into
//! every component that needs it; nothing reads tokens from ambient state.
//! Claims are decoded from the JWT payload segment for display and routing
//! only — signature verification is the backend's job, the console never
//! trusts these claims for authorization.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use motoadmin_core::error::AppError;
use motoadmin_core::result::AppResult;
use motoadmin_core::types::id::UserId;

/// The authenticated operator session.
#[derive(Debug, Clone)]
pub struct AuthContext {
    token: String,
    /// The operator's user id, when the token carries one.
    pub user_id: Option<UserId>,
    /// The operator's role, when the token carries one.
    pub role: Option<String>,
    /// Token expiry, when the token carries one.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Claims the console reads out of the token payload. The backend has
/// issued the user id under several names over time, so all three are
/// accepted, in preference order.
#[derive(Debug, Default, Deserialize)]
struct TokenClaims {
    #[serde(rename = "_id")]
    primary_id: Option<String>,
    id: Option<String>,
    #[serde(rename = "userId")]
    user_id: Option<String>,
    role: Option<String>,
    exp: Option<i64>,
}

impl AuthContext {
    /// Build an auth context from a bearer token.
    ///
    /// Fails with an authentication error when the token is not a
    /// decodable JWT, so a corrupt session surfaces at startup instead of
    /// as a stream of rejected requests.
    pub fn from_token(token: impl Into<String>) -> AppResult<Self> {
        let token = token.into();
        let claims = decode_claims(&token)?;

        let user_id = claims
            .primary_id
            .or(claims.id)
            .or(claims.user_id)
            .map(UserId::from);
        let expires_at = claims
            .exp
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single());

        Ok(Self {
            token,
            user_id,
            role: claims.role,
            expires_at,
        })
    }

    /// The raw bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether the token's expiry claim is in the past.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }
}

/// Decode the payload segment of a JWT without verifying the signature.
fn decode_claims(token: &str) -> AppResult<TokenClaims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| AppError::authentication("Malformed bearer token"))?;

    let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|e| {
        AppError::with_source(
            motoadmin_core::error::ErrorKind::Authentication,
            "Token payload is not valid base64",
            e,
        )
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::with_source(
            motoadmin_core::error::ErrorKind::Authentication,
            "Token payload is not valid JSON",
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(claims: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_user_id_resolution_prefers_primary() {
        let token = make_token(r#"{"_id": "u1", "id": "u2", "userId": "u3", "role": "admin"}"#);
        let ctx = AuthContext::from_token(token).unwrap();
        assert_eq!(ctx.user_id, Some(UserId::new("u1")));
        assert_eq!(ctx.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_user_id_fallback_chain() {
        let token = make_token(r#"{"userId": "u3"}"#);
        let ctx = AuthContext::from_token(token).unwrap();
        assert_eq!(ctx.user_id, Some(UserId::new("u3")));
        assert_eq!(ctx.role, None);
    }

    #[test]
    fn test_undecodable_token_is_rejected() {
        assert!(AuthContext::from_token("not-a-jwt").is_err());
        assert!(AuthContext::from_token("a.%%%.c").is_err());
    }

    #[test]
    fn test_expiry() {
        let expired = make_token(r#"{"_id": "u1", "exp": 1000000000}"#);
        assert!(AuthContext::from_token(expired).unwrap().is_expired());

        let no_exp = make_token(r#"{"_id": "u1"}"#);
        assert!(!AuthContext::from_token(no_exp).unwrap().is_expired());
    }
}
