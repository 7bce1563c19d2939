//! Sign In Use Case
//!
//! Credential verification and session token issuance. Every failure on
//! the credential path - unknown username, malformed input, wrong
//! password - collapses into the single `InvalidCredentials` error so
//! responses never reveal whether an account exists.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::SessionTokenCodec;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Login form input
#[derive(Debug, Clone)]
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Successful login: a signed session token plus the identity it carries
#[derive(Debug, Clone)]
pub struct SignInOutput {
    pub token: String,
    pub user_id: UserId,
    pub username: String,
}

/// Sign in use case
pub struct SignInUseCase<U: UserRepository> {
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
    codec: SessionTokenCodec,
}

impl<U: UserRepository> SignInUseCase<U> {
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        let codec = SessionTokenCodec::new(&config.session_secret);
        Self {
            user_repo,
            config,
            codec,
        }
    }

    /// Verify credentials and issue a session token
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Input that cannot be a valid handle cannot match an account;
        // fold it into the same unauthorized outcome.
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw = RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;
        if !user.password.verify(&raw, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .codec
            .issue(user.id, user.username.as_str(), self.config.session_ttl)?;

        tracing::info!(user_id = %user.id, username = %user.username, "User signed in");

        Ok(SignInOutput {
            token,
            user_id: user.id,
            username: user.username.into_inner(),
        })
    }
}
