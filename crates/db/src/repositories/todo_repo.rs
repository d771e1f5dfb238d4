//! Repository for the `todos` table.

use sqlx::PgPool;
use trackline_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, text, completed";

/// Provides data access for todo items.
pub struct TodoRepo;

impl TodoRepo {
    /// List all todos, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id ASC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Find a todo by its ID.
    ///
    /// Returns `None` when no row matches.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new todo, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!("INSERT INTO todos (text) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Partially update a todo by ID, returning the updated row.
    ///
    /// Absent fields keep their stored values via `COALESCE`. The `id`
    /// carried inside the DTO is ignored; the caller passes the target id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                text = COALESCE($2, text),
                completed = COALESCE($3, completed)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&input.text)
            .bind(input.completed)
            .fetch_optional(pool)
            .await
    }

    /// Invert a todo's completed flag in the store, returning the result.
    ///
    /// The store decides the resulting value, so concurrent toggles
    /// cannot desynchronize callers that adopt the returned row.
    pub async fn toggle(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET completed = NOT completed
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID, returning the row's prior state.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("DELETE FROM todos WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
