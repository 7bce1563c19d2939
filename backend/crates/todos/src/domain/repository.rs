//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{TodoId, UserId};

use crate::domain::entities::{NewTodo, Todo, TodoChanges};
use crate::error::TodoResult;

/// Todo store trait
///
/// Every operation is scoped by owner: an id belonging to another user
/// behaves exactly like a missing id. Mutations report whether a row was
/// touched; `false` is the not-found outcome, never an error.
#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    /// All todos for the owner, oldest first
    async fn list_for_owner(&self, owner_id: UserId) -> TodoResult<Vec<Todo>>;

    /// A single todo, only if it belongs to the owner
    async fn find_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<Option<Todo>>;

    /// Persist a new todo and return it with its store-assigned id
    async fn create(&self, todo: &NewTodo) -> TodoResult<Todo>;

    /// Apply field changes; `false` if no owned row matched
    async fn update_for_owner(
        &self,
        id: TodoId,
        owner_id: UserId,
        changes: &TodoChanges,
    ) -> TodoResult<bool>;

    /// Flip the completion flag; `false` if no owned row matched
    async fn toggle_complete_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<bool>;

    /// Delete; `false` if no owned row matched
    async fn delete_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<bool>;
}
