//! Sign Up Use Case
//!
//! Registration flow: validate the form, reject duplicates, hash the
//! password and persist. Registration does not sign the user in; the
//! caller redirects to the login page on success.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Registration form input
#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Sign up use case
pub struct SignUpUseCase<U: UserRepository> {
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U: UserRepository> SignUpUseCase<U> {
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Register a new user
    ///
    /// ## Errors
    /// - `PasswordMismatch` when the confirmation differs
    /// - `Validation` when the username or email is structurally invalid
    /// - `DuplicateUser` when either handle is already registered
    /// - `PasswordValidation` when the password violates the policy
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        // Confirmation is compared before anything touches the store
        if input.password != input.password_confirmation {
            return Err(AuthError::PasswordMismatch);
        }

        let username =
            UserName::new(input.username).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Pre-check gives the friendly duplicate message; the unique
        // constraints in the store remain the authority under races.
        if self
            .user_repo
            .exists_by_username_or_email(&username, &email)
            .await?
        {
            return Err(AuthError::DuplicateUser);
        }

        let raw = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.message().to_string()))?;
        let password = UserPassword::from_raw(&raw, self.config.pepper())?;

        let new_user = NewUser::new(
            email,
            username,
            input.first_name.trim().to_string(),
            input.last_name.trim().to_string(),
            password,
        );

        let created = self.user_repo.create(&new_user).await?;

        tracing::info!(
            user_id = %created.id,
            username = %created.username,
            "User registered"
        );

        Ok(created)
    }
}
