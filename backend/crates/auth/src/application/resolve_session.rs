//! Resolve Session Use Case
//!
//! Turns an incoming request's headers into either an authenticated
//! identity or the anonymous state. Every invalid-token reason -
//! missing cookie, malformed token, bad signature, expiry - degrades
//! silently to [`ResolvedSession::Anonymous`]; expiry is an implicit
//! logout, not an error surfaced to the caller.
//!
//! Identity is trusted from the claims alone; the credential store is
//! never consulted here (documented limitation, see crate docs).

use axum::http::HeaderMap;
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::SessionTokenCodec;

/// Authenticated identity resolved from a valid session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
}

/// Outcome of session resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSession {
    Identity(Identity),
    Anonymous,
}

impl ResolvedSession {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            ResolvedSession::Identity(id) => Some(id),
            ResolvedSession::Anonymous => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, ResolvedSession::Anonymous)
    }
}

/// Resolve session use case
pub struct ResolveSessionUseCase {
    config: Arc<AuthConfig>,
    codec: SessionTokenCodec,
}

impl ResolveSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        let codec = SessionTokenCodec::new(&config.session_secret);
        Self { config, codec }
    }

    /// Resolve the request's session cookie into an identity
    pub fn resolve(&self, headers: &HeaderMap) -> ResolvedSession {
        let Some(token) = platform::cookie::extract_cookie(headers, &self.config.session_cookie_name)
        else {
            return ResolvedSession::Anonymous;
        };

        match self.codec.decode(&token) {
            Ok(claims) => ResolvedSession::Identity(Identity {
                user_id: claims.user_id(),
                username: claims.sub,
            }),
            Err(reason) => {
                tracing::debug!(?reason, "Session token rejected, treating as anonymous");
                ResolvedSession::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use std::time::Duration;

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig {
            session_secret: [9u8; 32],
            ..AuthConfig::default()
        })
    }

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("access_token={value}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_no_cookie_is_anonymous() {
        let resolver = ResolveSessionUseCase::new(config());
        assert!(resolver.resolve(&HeaderMap::new()).is_anonymous());
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let config = config();
        let codec = SessionTokenCodec::new(&config.session_secret);
        let token = codec
            .issue(UserId::from_i64(5), "alice", Duration::from_secs(3600))
            .unwrap();

        let resolver = ResolveSessionUseCase::new(config);
        let resolved = resolver.resolve(&headers_with_cookie(&token));

        let identity = resolved.identity().expect("should resolve to identity");
        assert_eq!(identity.user_id.as_i64(), 5);
        assert_eq!(identity.username, "alice");
    }

    #[test]
    fn test_garbage_token_is_anonymous() {
        let resolver = ResolveSessionUseCase::new(config());
        assert!(
            resolver
                .resolve(&headers_with_cookie("not-a-token"))
                .is_anonymous()
        );
    }

    #[test]
    fn test_foreign_signature_is_anonymous() {
        let other_codec = SessionTokenCodec::new(&[1u8; 32]);
        let token = other_codec
            .issue(UserId::from_i64(5), "alice", Duration::from_secs(3600))
            .unwrap();

        let resolver = ResolveSessionUseCase::new(config());
        assert!(resolver.resolve(&headers_with_cookie(&token)).is_anonymous());
    }

    #[test]
    fn test_expired_token_degrades_silently() {
        use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

        let config = config();
        let claims = crate::application::token::SessionClaims {
            sub: "alice".to_string(),
            user_id: 5,
            exp: chrono::Utc::now().timestamp() - 30,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&config.session_secret),
        )
        .unwrap();

        let resolver = ResolveSessionUseCase::new(config);
        assert!(resolver.resolve(&headers_with_cookie(&token)).is_anonymous());
    }

    #[test]
    fn test_differently_named_cookie_ignored() {
        let config = config();
        let codec = SessionTokenCodec::new(&config.session_secret);
        let token = codec
            .issue(UserId::from_i64(5), "alice", Duration::from_secs(3600))
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("other_cookie={token}")).unwrap(),
        );

        let resolver = ResolveSessionUseCase::new(config);
        assert!(resolver.resolve(&headers).is_anonymous());
    }
}
