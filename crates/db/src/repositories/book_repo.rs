//! Repository for the `books` table.
//!
//! Books are read-only through the API: lookup by id, full listing, and
//! case-insensitive title search.

use sqlx::PgPool;
use trackline_core::types::DbId;

use crate::models::book::Book;

/// Column list for `books` queries.
const COLUMNS: &str = "id, title, author, rating";

/// Provides read access to the book shelf.
pub struct BookRepo;

impl BookRepo {
    /// List all books, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id ASC");
        sqlx::query_as::<_, Book>(&query).fetch_all(pool).await
    }

    /// Find a book by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search books whose title contains the given fragment (ILIKE).
    pub async fn search_by_title(pool: &PgPool, title: &str) -> Result<Vec<Book>, sqlx::Error> {
        let pattern = format!("%{title}%");
        let query = format!(
            "SELECT {COLUMNS} FROM books WHERE title ILIKE $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }
}
