//! Create Todo Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::{NewTodo, Todo};
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::{Priority, Title};
use crate::error::{TodoError, TodoResult};

/// Input DTO for create todo
///
/// Raw form values; validation happens here, at the boundary between
/// the form and the domain.
#[derive(Debug, Clone)]
pub struct CreateTodoInput {
    pub title: String,
    pub description: String,
    pub priority: i16,
}

/// Create Todo Use Case
pub struct CreateTodoUseCase<T: TodoRepository> {
    todo_repo: Arc<T>,
}

impl<T: TodoRepository> CreateTodoUseCase<T> {
    pub fn new(todo_repo: Arc<T>) -> Self {
        Self { todo_repo }
    }

    pub async fn execute(&self, owner_id: UserId, input: CreateTodoInput) -> TodoResult<Todo> {
        let (title, description, priority) = validate_fields(&input.title, &input.description, input.priority)?;

        let todo = self
            .todo_repo
            .create(&NewTodo::new(title, description, priority, owner_id))
            .await?;

        tracing::info!(todo_id = %todo.id, owner_id = %owner_id, "Todo created");

        Ok(todo)
    }
}

/// Shared field validation for the create and edit flows
pub(crate) fn validate_fields(
    title: &str,
    description: &str,
    priority: i16,
) -> TodoResult<(Title, Option<String>, Priority)> {
    let title = Title::new(title).map_err(|e| TodoError::Validation(e.to_string()))?;

    let description = {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    let priority = Priority::new(priority).ok_or_else(|| {
        TodoError::Validation(format!(
            "Priority must be between {} and {}",
            Priority::MIN,
            Priority::MAX
        ))
    })?;

    Ok((title, description, priority))
}
