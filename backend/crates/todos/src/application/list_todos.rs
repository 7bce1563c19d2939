//! List Todos Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// List Todos Use Case
pub struct ListTodosUseCase<T: TodoRepository> {
    todo_repo: Arc<T>,
}

impl<T: TodoRepository> ListTodosUseCase<T> {
    pub fn new(todo_repo: Arc<T>) -> Self {
        Self { todo_repo }
    }

    /// All of the owner's todos, oldest first
    pub async fn execute(&self, owner_id: UserId) -> TodoResult<Vec<Todo>> {
        self.todo_repo.list_for_owner(owner_id).await
    }
}
