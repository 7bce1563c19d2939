//! Presentation Layer
//!
//! Browser-facing HTTP handlers, form DTOs, HTML pages and router.

pub mod forms;
pub mod handlers;
pub mod pages;
pub mod router;

pub use handlers::AuthAppState;
pub use router::{auth_router, auth_router_generic};
