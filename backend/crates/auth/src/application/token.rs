//! Session Token Codec
//!
//! Signs and verifies the compact claims structure carried in the
//! session cookie. Tokens are self-contained: subject (username),
//! numeric user id, and an absolute expiry, HS256-signed with the
//! server-held secret. Decoding is total - it never panics or
//! propagates, it returns a tagged invalid reason instead.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AuthError, AuthResult};

/// Decoded session token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the username
    pub sub: String,
    /// Numeric user id
    pub user_id: i64,
    /// Absolute expiry (seconds since epoch)
    pub exp: i64,
}

impl SessionClaims {
    pub fn user_id(&self) -> UserId {
        UserId::from_i64(self.user_id)
    }
}

/// Why a token failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenInvalid {
    /// Not a structurally valid token
    Malformed,
    /// Signature or algorithm mismatch
    BadSignature,
    /// Structurally valid and correctly signed, but past its expiry
    Expired,
}

/// HS256 codec over [`SessionClaims`]
///
/// Holds the derived keys; the secret itself is injected at
/// construction, never read from ambient state.
pub struct SessionTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionTokenCodec {
    pub fn new(secret: &[u8; 32]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock-skew leeway: expiry is exact
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a signed token expiring `ttl` from now
    pub fn issue(&self, user_id: UserId, username: &str, ttl: Duration) -> AuthResult<String> {
        let exp = Utc::now().timestamp() + ttl.as_secs() as i64;
        let claims = SessionClaims {
            sub: username.to_string(),
            user_id: user_id.as_i64(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenIssue)
    }

    /// Verify and decode a token
    ///
    /// Total function: every failure mode collapses into a
    /// [`TokenInvalid`] reason, never a partially-trusted value.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenInvalid> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenInvalid::Expired,
                JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
                    TokenInvalid::BadSignature
                }
                _ => TokenInvalid::Malformed,
            })
    }
}
