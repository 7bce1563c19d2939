//! Application Layer
//!
//! One use case per operation; each takes the owner resolved from the
//! session and never trusts an owner id from the request body.

pub mod create_todo;
pub mod delete_todo;
pub mod list_todos;
pub mod toggle_complete;
pub mod update_todo;

// Re-exports
pub use create_todo::{CreateTodoInput, CreateTodoUseCase};
pub use delete_todo::DeleteTodoUseCase;
pub use list_todos::ListTodosUseCase;
pub use toggle_complete::ToggleCompleteUseCase;
pub use update_todo::{UpdateTodoInput, UpdateTodoUseCase};
