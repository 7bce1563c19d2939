//! Form DTOs

use serde::Deserialize;

/// POST /todos/add-todo and POST /todos/edit-todo/{id} body
///
/// Priority arrives as the raw form string; parsing failures re-render
/// the form like any other validation error instead of a 422.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: String,
}

impl TodoForm {
    /// Parse the priority field; `None` covers both non-numeric input
    /// and overflow.
    pub fn parsed_priority(&self) -> Option<i16> {
        self.priority.trim().parse::<i16>().ok()
    }
}
