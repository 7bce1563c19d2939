//! Todo Router

use axum::{Router, routing::get};
use std::sync::Arc;

use auth::ResolveSessionUseCase;

use crate::domain::repository::TodoRepository;
use crate::infra::postgres::PgTodoRepository;
use crate::presentation::handlers::{self, TodoAppState};

/// Create the Todo router with PostgreSQL repository
pub fn todo_router(repo: PgTodoRepository, sessions: Arc<ResolveSessionUseCase>) -> Router {
    todo_router_generic(repo, sessions)
}

/// Create a generic Todo router for any repository implementation
pub fn todo_router_generic<T>(repo: T, sessions: Arc<ResolveSessionUseCase>) -> Router
where
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let state = TodoAppState {
        repo: Arc::new(repo),
        sessions,
    };

    Router::new()
        .route("/", get(handlers::list_todos::<T>))
        .route(
            "/add-todo",
            get(handlers::add_todo_page::<T>).post(handlers::add_todo::<T>),
        )
        .route(
            "/edit-todo/{id}",
            get(handlers::edit_todo_page::<T>).post(handlers::edit_todo::<T>),
        )
        .route("/complete/{id}", get(handlers::complete_todo::<T>))
        .route("/delete/{id}", get(handlers::delete_todo::<T>))
        .with_state(state)
}
