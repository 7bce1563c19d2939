//! Todos Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Todo entity, value objects, repository trait
//! - `application/` - Use cases (one per operation)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, forms, pages, router
//!
//! ## Ownership Model
//! Every read and write is scoped to the owner taken from the resolved
//! session. A todo belonging to another user is indistinguishable from
//! a todo that does not exist: both produce the not-found outcome and
//! never mutate anything.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{NewTodo, Todo};
pub use domain::value_objects::{Priority, Title};
pub use error::{TodoError, TodoResult};
pub use infra::postgres::PgTodoRepository;
pub use presentation::router::{todo_router, todo_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
