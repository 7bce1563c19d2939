//! Domain Layer

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{NewTodo, Todo, TodoChanges};
pub use repository::TodoRepository;
pub use value_objects::{Priority, Title};
