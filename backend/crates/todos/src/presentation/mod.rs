//! Presentation Layer
//!
//! Browser-facing HTTP handlers, form DTOs, HTML pages and router.

pub mod forms;
pub mod handlers;
pub mod pages;
pub mod router;

pub use handlers::TodoAppState;
pub use router::{todo_router, todo_router_generic};
