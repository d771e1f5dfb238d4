//! Book shelf models.
//!
//! Books are read-only through the API, so there are no create/update DTOs.

use serde::Serialize;
use sqlx::FromRow;
use trackline_core::types::DbId;

/// A row from the `books` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub rating: f64,
}
