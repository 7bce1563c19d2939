//! Toggle Complete Use Case

use kernel::id::{TodoId, UserId};
use std::sync::Arc;

use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Toggle Complete Use Case
///
/// Flips the completion flag in a single statement so concurrent
/// toggles never read a stale value.
pub struct ToggleCompleteUseCase<T: TodoRepository> {
    todo_repo: Arc<T>,
}

impl<T: TodoRepository> ToggleCompleteUseCase<T> {
    pub fn new(todo_repo: Arc<T>) -> Self {
        Self { todo_repo }
    }

    pub async fn execute(&self, owner_id: UserId, id: TodoId) -> TodoResult<()> {
        let toggled = self
            .todo_repo
            .toggle_complete_for_owner(id, owner_id)
            .await?;
        if !toggled {
            return Err(TodoError::NotFound);
        }

        tracing::info!(todo_id = %id, owner_id = %owner_id, "Todo completion toggled");

        Ok(())
    }
}
