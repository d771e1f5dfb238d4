//! Anime watchlist models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackline_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `anime` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AnimeEntry {
    pub id: DbId,
    pub title: String,
    pub status: String,
    pub score: f64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for adding an entry to the watchlist.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAnimeEntry {
    pub title: String,
    pub status: String,
    pub score: f64,
}

/// DTO for partially updating a watchlist entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAnimeEntry {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub score: Option<f64>,
}

impl UpdateAnimeEntry {
    /// Whether the payload carries at least one mutable field.
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.status.is_some() || self.score.is_some()
    }
}
