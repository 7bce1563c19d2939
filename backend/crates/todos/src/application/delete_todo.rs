//! Delete Todo Use Case

use kernel::id::{TodoId, UserId};
use std::sync::Arc;

use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Delete Todo Use Case
pub struct DeleteTodoUseCase<T: TodoRepository> {
    todo_repo: Arc<T>,
}

impl<T: TodoRepository> DeleteTodoUseCase<T> {
    pub fn new(todo_repo: Arc<T>) -> Self {
        Self { todo_repo }
    }

    pub async fn execute(&self, owner_id: UserId, id: TodoId) -> TodoResult<()> {
        let deleted = self.todo_repo.delete_for_owner(id, owner_id).await?;
        if !deleted {
            return Err(TodoError::NotFound);
        }

        tracing::info!(todo_id = %id, owner_id = %owner_id, "Todo deleted");

        Ok(())
    }
}
