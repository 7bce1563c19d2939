//! Sign Out Use Case
//!
//! Sign-out is stateless on the server: tokens are not revocable, so the
//! whole operation is clearing the cookie (done by the presentation
//! layer) plus an audit log line here. It succeeds whether or not a
//! valid session was presented.

use crate::application::resolve_session::ResolvedSession;

/// Sign out use case
#[derive(Debug, Default)]
pub struct SignOutUseCase;

impl SignOutUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Record the sign-out; the caller clears the cookie unconditionally
    pub fn execute(&self, session: &ResolvedSession) {
        match session.identity() {
            Some(identity) => {
                tracing::info!(
                    user_id = %identity.user_id,
                    username = %identity.username,
                    "User signed out"
                );
            }
            None => {
                tracing::debug!("Sign-out requested without a valid session");
            }
        }
    }
}
