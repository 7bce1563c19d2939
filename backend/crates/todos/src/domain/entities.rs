//! Domain Entities

use kernel::id::{TodoId, UserId};

use crate::domain::value_objects::{Priority, Title};

/// Persisted todo item
///
/// The numeric id is assigned by the store (BIGSERIAL); `owner_id` binds
/// the item to the user who created it and never changes.
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: TodoId,
    pub title: Title,
    pub description: Option<String>,
    pub priority: Priority,
    pub complete: bool,
    pub owner_id: UserId,
}

/// A todo pending persistence (no id yet)
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: Title,
    pub description: Option<String>,
    pub priority: Priority,
    pub owner_id: UserId,
}

impl NewTodo {
    /// Assemble a new item; items start incomplete
    pub fn new(
        title: Title,
        description: Option<String>,
        priority: Priority,
        owner_id: UserId,
    ) -> Self {
        Self {
            title,
            description,
            priority,
            owner_id,
        }
    }
}

/// Field changes applied by the edit flow
///
/// Completion is not part of an edit; it only changes through the
/// toggle operation.
#[derive(Debug, Clone)]
pub struct TodoChanges {
    pub title: Title,
    pub description: Option<String>,
    pub priority: Priority,
}
