//! HTTP Handlers
//!
//! Every handler resolves the session first; anonymous requests are
//! redirected to the login page. Ownership misses redirect back to the
//! list instead of exposing whether the id exists.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use auth::{Identity, ResolveSessionUseCase};
use kernel::id::TodoId;

use crate::application::{
    CreateTodoInput, CreateTodoUseCase, DeleteTodoUseCase, ListTodosUseCase, ToggleCompleteUseCase,
    UpdateTodoInput, UpdateTodoUseCase,
};
use crate::domain::repository::TodoRepository;
use crate::error::TodoError;
use crate::presentation::forms::TodoForm;
use crate::presentation::pages::{render_add_page, render_edit_page, render_list_page};

/// Shared state for todo handlers
#[derive(Clone)]
pub struct TodoAppState<T>
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<T>,
    pub sessions: Arc<ResolveSessionUseCase>,
}

fn redirect(to: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to.to_string())]).into_response()
}

fn require_identity(sessions: &ResolveSessionUseCase, headers: &HeaderMap) -> Result<Identity, Response> {
    match sessions.resolve(headers).identity() {
        Some(identity) => Ok(identity.clone()),
        None => Err(redirect("/auth/")),
    }
}

/// The message shown when the priority field fails to parse at all
fn bad_priority_message() -> String {
    use crate::domain::value_objects::Priority;
    format!(
        "Priority must be between {} and {}",
        Priority::MIN,
        Priority::MAX
    )
}

// ============================================================================
// List
// ============================================================================

/// GET /todos/
pub async fn list_todos<T>(State(state): State<TodoAppState<T>>, headers: HeaderMap) -> Response
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    match ListTodosUseCase::new(state.repo.clone())
        .execute(identity.user_id)
        .await
    {
        Ok(todos) => Html(render_list_page(&identity.username, &todos)).into_response(),
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Create
// ============================================================================

/// GET /todos/add-todo
pub async fn add_todo_page<T>(State(state): State<TodoAppState<T>>, headers: HeaderMap) -> Response
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    if let Err(response) = require_identity(&state.sessions, &headers) {
        return response;
    }
    Html(render_add_page(None)).into_response()
}

/// POST /todos/add-todo
pub async fn add_todo<T>(
    State(state): State<TodoAppState<T>>,
    headers: HeaderMap,
    Form(form): Form<TodoForm>,
) -> Response
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    let Some(priority) = form.parsed_priority() else {
        return Html(render_add_page(Some(&bad_priority_message()))).into_response();
    };

    let input = CreateTodoInput {
        title: form.title,
        description: form.description,
        priority,
    };

    match CreateTodoUseCase::new(state.repo.clone())
        .execute(identity.user_id, input)
        .await
    {
        Ok(_) => redirect("/todos/"),
        Err(TodoError::Validation(msg)) => Html(render_add_page(Some(&msg))).into_response(),
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Edit
// ============================================================================

/// GET /todos/edit-todo/{id}
pub async fn edit_todo_page<T>(
    State(state): State<TodoAppState<T>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    match state
        .repo
        .find_for_owner(TodoId::from_i64(id), identity.user_id)
        .await
    {
        Ok(Some(todo)) => Html(render_edit_page(
            id,
            todo.title.as_str(),
            todo.description.as_deref().unwrap_or(""),
            Some(todo.priority.level()),
            None,
        ))
        .into_response(),
        // Not owned or not there: back to the list, no distinction
        Ok(None) => redirect("/todos/"),
        Err(err) => err.into_response(),
    }
}

/// POST /todos/edit-todo/{id}
pub async fn edit_todo<T>(
    State(state): State<TodoAppState<T>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Form(form): Form<TodoForm>,
) -> Response
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    let Some(priority) = form.parsed_priority() else {
        return Html(render_edit_page(
            id,
            &form.title,
            &form.description,
            None,
            Some(&bad_priority_message()),
        ))
        .into_response();
    };

    let input = UpdateTodoInput {
        title: form.title.clone(),
        description: form.description.clone(),
        priority,
    };

    match UpdateTodoUseCase::new(state.repo.clone())
        .execute(identity.user_id, TodoId::from_i64(id), input)
        .await
    {
        Ok(()) => redirect("/todos/"),
        Err(TodoError::Validation(msg)) => Html(render_edit_page(
            id,
            &form.title,
            &form.description,
            Some(priority),
            Some(&msg),
        ))
        .into_response(),
        Err(TodoError::NotFound) => redirect("/todos/"),
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Toggle / Delete
// ============================================================================

/// GET /todos/complete/{id}
pub async fn complete_todo<T>(
    State(state): State<TodoAppState<T>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    match ToggleCompleteUseCase::new(state.repo.clone())
        .execute(identity.user_id, TodoId::from_i64(id))
        .await
    {
        Ok(()) | Err(TodoError::NotFound) => redirect("/todos/"),
        Err(err) => err.into_response(),
    }
}

/// GET /todos/delete/{id}
pub async fn delete_todo<T>(
    State(state): State<TodoAppState<T>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let identity = match require_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    match DeleteTodoUseCase::new(state.repo.clone())
        .execute(identity.user_id, TodoId::from_i64(id))
        .await
    {
        Ok(()) | Err(TodoError::NotFound) => redirect("/todos/"),
        Err(err) => err.into_response(),
    }
}
