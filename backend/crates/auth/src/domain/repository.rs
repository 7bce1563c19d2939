//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Credential store trait
///
/// Uniqueness on username and email is enforced at this layer; a
/// duplicate insert fails distinguishably (conflict) from "not found".
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user and return it with its store-assigned id
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by username (case-sensitive exact match)
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Find user by email (case-sensitive exact match)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check whether the username or the email is already registered
    async fn exists_by_username_or_email(
        &self,
        username: &UserName,
        email: &Email,
    ) -> AuthResult<bool>;
}
