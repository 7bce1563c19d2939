//! PostgreSQL Repository Implementations
//!
//! Every statement carries the `owner_id` predicate, so ownership is
//! enforced by the store itself rather than by a prior read.

use kernel::id::{TodoId, UserId};
use sqlx::PgPool;

use crate::domain::entities::{NewTodo, Todo, TodoChanges};
use crate::domain::repository::TodoRepository;
use crate::domain::value_objects::{Priority, Title};
use crate::error::TodoResult;

/// PostgreSQL-backed todo repository
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TodoRepository for PgTodoRepository {
    async fn list_for_owner(&self, owner_id: UserId) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT
                id,
                title,
                description,
                priority,
                complete,
                owner_id
            FROM todos
            WHERE owner_id = $1
            ORDER BY id
            "#,
        )
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_todo()).collect())
    }

    async fn find_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT
                id,
                title,
                description,
                priority,
                complete,
                owner_id
            FROM todos
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_todo()))
    }

    async fn create(&self, todo: &NewTodo) -> TodoResult<Todo> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (
                title,
                description,
                priority,
                complete,
                owner_id
            ) VALUES ($1, $2, $3, FALSE, $4)
            RETURNING
                id,
                title,
                description,
                priority,
                complete,
                owner_id
            "#,
        )
        .bind(todo.title.as_str())
        .bind(todo.description.as_deref())
        .bind(todo.priority.level())
        .bind(todo.owner_id.as_i64())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_todo())
    }

    async fn update_for_owner(
        &self,
        id: TodoId,
        owner_id: UserId,
        changes: &TodoChanges,
    ) -> TodoResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE todos SET
                title = $3,
                description = $4,
                priority = $5
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner_id.as_i64())
        .bind(changes.title.as_str())
        .bind(changes.description.as_deref())
        .bind(changes.priority.level())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn toggle_complete_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<bool> {
        // Single statement: the flip is atomic under concurrent requests
        let affected = sqlx::query(
            r#"
            UPDATE todos SET
                complete = NOT complete
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner_id.as_i64())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete_for_owner(&self, id: TodoId, owner_id: UserId) -> TodoResult<bool> {
        let affected = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
            .bind(id.as_i64())
            .bind(owner_id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: Option<String>,
    priority: i16,
    complete: bool,
    owner_id: i64,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo {
            id: TodoId::from_i64(self.id),
            title: Title::from_db(self.title),
            description: self.description,
            priority: Priority::from_db(self.priority),
            complete: self.complete,
            owner_id: UserId::from_i64(self.owner_id),
        }
    }
}
