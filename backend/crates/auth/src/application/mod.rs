//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod resolve_session;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use resolve_session::{Identity, ResolveSessionUseCase, ResolvedSession};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::{SessionClaims, SessionTokenCodec, TokenInvalid};
