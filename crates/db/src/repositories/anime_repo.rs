//! Repository for the `anime` table.

use sqlx::PgPool;
use trackline_core::types::DbId;

use crate::models::anime::{AnimeEntry, CreateAnimeEntry, UpdateAnimeEntry};

/// Column list for `anime` queries.
const COLUMNS: &str = "id, title, status, score";

/// Provides data access for the anime watchlist.
pub struct AnimeRepo;

impl AnimeRepo {
    /// List all watchlist entries, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<AnimeEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM anime ORDER BY id ASC");
        sqlx::query_as::<_, AnimeEntry>(&query).fetch_all(pool).await
    }

    /// Find a watchlist entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AnimeEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM anime WHERE id = $1");
        sqlx::query_as::<_, AnimeEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new watchlist entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnimeEntry,
    ) -> Result<AnimeEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO anime (title, status, score)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnimeEntry>(&query)
            .bind(&input.title)
            .bind(&input.status)
            .bind(input.score)
            .fetch_one(pool)
            .await
    }

    /// Partially update a watchlist entry by ID, returning the updated row.
    ///
    /// Absent fields keep their stored values via `COALESCE`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnimeEntry,
    ) -> Result<Option<AnimeEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE anime SET
                title = COALESCE($2, title),
                status = COALESCE($3, status),
                score = COALESCE($4, score)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnimeEntry>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.status)
            .bind(input.score)
            .fetch_optional(pool)
            .await
    }

    /// Delete a watchlist entry by ID, returning the row's prior state.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<AnimeEntry>, sqlx::Error> {
        let query = format!("DELETE FROM anime WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, AnimeEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
