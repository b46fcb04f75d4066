use std::time::Duration;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    config::{JwtConfig, ACCESS_TOKEN_TTL_MINUTES, REFRESH_TOKEN_TTL_HOURS},
    error::ApiError,
    state::AppState,
};

/// Which signing family a token belongs to. Each family has its own secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Invalid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: usize,
    pub exp: usize,
    // Fresh per token, so rotation always produces a byte-distinct value.
    pub jti: Uuid,
}

/// Signing and verification keys for both token families.
#[derive(Clone)]
pub struct JwtKeys {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            access_secret,
            refresh_secret,
        } = state.config.jwt.clone();
        Self::new(&access_secret, &refresh_secret)
    }
}

impl JwtKeys {
    pub fn new(access_secret: &str, refresh_secret: &str) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl: Duration::from_secs(ACCESS_TOKEN_TTL_MINUTES as u64 * 60),
            refresh_ttl: Duration::from_secs(REFRESH_TOKEN_TTL_HOURS as u64 * 60 * 60),
        }
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    fn sign_with_kind(&self, user_id: Uuid, kind: TokenKind) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let (key, ttl) = match kind {
            TokenKind::Access => (&self.access_encoding, self.access_ttl),
            TokenKind::Refresh => (&self.refresh_encoding, self.refresh_ttl),
        };
        let exp = now + TimeDuration::seconds(ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            jti: Uuid::new_v4(),
        };
        let token = encode(&Header::default(), &claims, key)?;
        debug!(user_id = %user_id, kind = ?kind, "jwt signed");
        Ok(token)
    }

    pub fn sign_access(&self, user_id: Uuid) -> anyhow::Result<String> {
        self.sign_with_kind(user_id, TokenKind::Access)
    }

    pub fn sign_refresh(&self, user_id: Uuid) -> anyhow::Result<String> {
        self.sign_with_kind(user_id, TokenKind::Refresh)
    }

    fn verify_with_key(&self, token: &str, key: &DecodingKey) -> Result<Uuid, TokenError> {
        let data =
            decode::<Claims>(token, key, &Validation::default()).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims.sub)
    }

    pub fn verify_access(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_with_key(token, &self.access_decoding)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_with_key(token, &self.refresh_decoding)
    }
}

/// Extracts the caller's user id from a bearer access token.
pub struct AuthUser(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::MissingAccessToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::MissingAccessToken)?;

        match keys.verify_access(token) {
            Ok(user_id) => Ok(AuthUser(user_id)),
            Err(TokenError::Expired) => {
                warn!("expired access token");
                Err(ApiError::AccessTokenExpired)
            }
            Err(TokenError::Invalid) => {
                warn!("invalid access token");
                Err(ApiError::InvalidAccessToken)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        JwtKeys::new("test-access-secret", "test-refresh-secret")
    }

    #[test]
    fn sign_and_verify_access_token() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let token = keys.sign_access(user_id).expect("sign access");
        let verified = keys.verify_access(&token).expect("verify access");
        assert_eq!(verified, user_id);
    }

    #[test]
    fn sign_and_verify_refresh_token() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let token = keys.sign_refresh(user_id).expect("sign refresh");
        let verified = keys.verify_refresh(&token).expect("verify refresh");
        assert_eq!(verified, user_id);
    }

    #[test]
    fn token_families_do_not_cross_verify() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();

        let access = keys.sign_access(user_id).expect("sign access");
        assert_eq!(keys.verify_refresh(&access), Err(TokenError::Invalid));

        let refresh = keys.sign_refresh(user_id).expect("sign refresh");
        assert_eq!(keys.verify_access(&refresh), Err(TokenError::Invalid));
    }

    #[test]
    fn repeated_signing_rotates_bytes() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let first = keys.sign_refresh(user_id).expect("sign refresh");
        let second = keys.sign_refresh(user_id).expect("sign refresh");
        assert_ne!(first, second);
    }

    #[test]
    fn tampered_token_is_invalid() {
        let keys = make_keys();
        let token = keys.sign_access(Uuid::new_v4()).expect("sign access");
        let mut tampered = token.clone();
        tampered.pop();
        assert_eq!(keys.verify_access(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let keys = make_keys();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        // Well past the default validation leeway.
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: (now - 7200) as usize,
            exp: (now - 3600) as usize,
            jti: Uuid::new_v4(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-access-secret"),
        )
        .expect("encode");
        assert_eq!(keys.verify_access(&token), Err(TokenError::Expired));
    }

    #[test]
    fn wrong_secret_is_invalid_not_expired() {
        let keys = make_keys();
        let other = JwtKeys::new("other-access-secret", "other-refresh-secret");
        let token = other.sign_access(Uuid::new_v4()).expect("sign access");
        assert_eq!(keys.verify_access(&token), Err(TokenError::Invalid));
    }
}
