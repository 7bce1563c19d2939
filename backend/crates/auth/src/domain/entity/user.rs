//! User Entity
//!
//! The identity record owned by the credential store. Created on
//! registration and immutable afterwards except for the activation flag
//! (which no in-scope flow reads).

use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// Persisted user entity
///
/// The numeric id is assigned by the store (BIGSERIAL), so a user only
/// exists in this form once it has been persisted.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned numeric identifier
    pub id: UserId,
    /// Unique email address
    pub email: Email,
    /// Unique username (case-sensitive)
    pub username: UserName,
    pub first_name: String,
    pub last_name: String,
    /// Argon2id PHC-format digest, never plaintext
    pub password: UserPassword,
    /// Activation flag; stored but never consulted by the session flows
    pub is_active: bool,
}

/// A user pending persistence (no id yet)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub username: UserName,
    pub first_name: String,
    pub last_name: String,
    pub password: UserPassword,
    pub is_active: bool,
}

impl NewUser {
    /// Assemble a registration record
    ///
    /// New accounts start inactive.
    pub fn new(
        email: Email,
        username: UserName,
        first_name: String,
        last_name: String,
        password: UserPassword,
    ) -> Self {
        Self {
            email,
            username,
            first_name,
            last_name,
            password,
            is_active: false,
        }
    }
}
