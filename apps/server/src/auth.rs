use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::main_lib::AppState;

const UNAUTHORIZED: &str = "Unauthorized";

/// The authenticated caller, placed in request extensions by [`require_session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: i32,
}

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
    iat: usize,
}

impl AuthManager {
    pub fn new(secret: &[u8], token_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            token_ttl,
        }
    }

    pub fn issue_token(&self, user_id: i32) -> Result<String, ApiError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ApiError::Internal("System clock is before UNIX_EPOCH".into()))?;
        let exp = now + self.token_ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to sign token: {e}")))
    }

    pub fn validate_token(&self, token: &str) -> Result<Session, ApiError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|err| {
            tracing::debug!("Rejected session token: {:?}", err.kind());
            ApiError::Unauthorized(UNAUTHORIZED.to_string())
        })?;
        let user_id = data
            .claims
            .sub
            .parse()
            .map_err(|_| ApiError::Unauthorized(UNAUTHORIZED.to_string()))?;
        Ok(Session { user_id })
    }

    pub fn expires_in(&self) -> Duration {
        self.token_ttl
    }
}

/// Accepts base64 for a 32-byte key, or a raw 32-character ASCII string.
pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    match BASE64.decode(trimmed) {
        Ok(bytes) if bytes.len() == 32 => Ok(bytes),
        _ if trimmed.len() == 32 => Ok(trimmed.as_bytes().to_vec()),
        _ => anyhow::bail!("JWT secret must be base64 for 32 bytes or a 32-byte ASCII string"),
    }
}

pub fn generate_secret_key() -> Vec<u8> {
    let mut secret = vec![0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    let header = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token =
        bearer_token(&request).ok_or_else(|| ApiError::Unauthorized(UNAUTHORIZED.to_string()))?;
    let session = state.auth.validate_token(token)?;
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .copied()
            .ok_or_else(|| ApiError::Unauthorized(UNAUTHORIZED.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(ttl: Duration) -> AuthManager {
        AuthManager::new(&generate_secret_key(), ttl)
    }

    #[test]
    fn test_token_round_trip_carries_user_id() {
        let auth = manager(Duration::from_secs(60));
        let token = auth.issue_token(42).unwrap();
        assert_eq!(auth.validate_token(&token).unwrap(), Session { user_id: 42 });
    }

    #[test]
    fn test_token_from_other_key_is_rejected() {
        let token = manager(Duration::from_secs(60)).issue_token(1).unwrap();
        let other = manager(Duration::from_secs(60));
        assert!(matches!(
            other.validate_token(&token),
            Err(ApiError::Unauthorized(_))
        ));
        assert!(other.validate_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_decode_secret_key() {
        let encoded = BASE64.encode([7u8; 32]);
        assert_eq!(decode_secret_key(&encoded).unwrap(), vec![7u8; 32]);
        assert_eq!(
            decode_secret_key("0123456789abcdef0123456789abcdef").unwrap(),
            b"0123456789abcdef0123456789abcdef".to_vec()
        );
        assert!(decode_secret_key("").is_err());
        assert!(decode_secret_key(&BASE64.encode([1u8; 16])).is_err());
    }
}
