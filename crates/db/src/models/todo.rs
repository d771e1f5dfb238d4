//! Todo list models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackline_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub text: String,
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a todo. `completed` always starts false.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodo {
    pub text: String,
}

/// DTO for partially updating a todo.
///
/// The wire contract carries the target `id` in the body; only fields
/// present in the payload are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodo {
    pub id: Option<DbId>,
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Whether the payload carries at least one mutable field.
    pub fn has_changes(&self) -> bool {
        self.text.is_some() || self.completed.is_some()
    }
}
