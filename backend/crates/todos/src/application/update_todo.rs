//! Update Todo Use Case

use kernel::id::{TodoId, UserId};
use std::sync::Arc;

use crate::application::create_todo::validate_fields;
use crate::domain::entities::TodoChanges;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Input DTO for update todo
#[derive(Debug, Clone)]
pub struct UpdateTodoInput {
    pub title: String,
    pub description: String,
    pub priority: i16,
}

/// Update Todo Use Case
pub struct UpdateTodoUseCase<T: TodoRepository> {
    todo_repo: Arc<T>,
}

impl<T: TodoRepository> UpdateTodoUseCase<T> {
    pub fn new(todo_repo: Arc<T>) -> Self {
        Self { todo_repo }
    }

    /// Apply field changes to an owned todo
    ///
    /// A miss (no such id, or owned by someone else) is `NotFound`.
    pub async fn execute(
        &self,
        owner_id: UserId,
        id: TodoId,
        input: UpdateTodoInput,
    ) -> TodoResult<()> {
        let (title, description, priority) =
            validate_fields(&input.title, &input.description, input.priority)?;

        let changes = TodoChanges {
            title,
            description,
            priority,
        };

        let updated = self
            .todo_repo
            .update_for_owner(id, owner_id, &changes)
            .await?;
        if !updated {
            return Err(TodoError::NotFound);
        }

        tracing::info!(todo_id = %id, owner_id = %owner_id, "Todo updated");

        Ok(())
    }
}
