//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, forms, pages, router
//!
//! ## Features
//! - User registration with email + username + password
//! - Login issuing a signed, self-contained session token in a cookie
//! - Stateless session resolution (no server-side session table)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Session tokens are HS256-signed claims with an absolute expiry
//! - Expired or tampered tokens degrade silently to the anonymous state
//!
//! ## Known Limitation
//! Identity is trusted from the token's claims alone: resolution never
//! re-checks the user row, so a deactivated or deleted user's unexpired
//! token stays valid until its natural expiry. There is no server-side
//! revocation list; logout only clears the client cookie.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::resolve_session::{Identity, ResolveSessionUseCase, ResolvedSession};
pub use application::token::{SessionClaims, SessionTokenCodec, TokenInvalid};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
