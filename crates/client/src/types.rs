//! Wire types for records returned by the tracking API.

use serde::{Deserialize, Serialize};
use trackline_core::types::DbId;

/// A todo item as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub text: String,
    pub completed: bool,
}

/// An anime watchlist entry as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeEntry {
    pub id: DbId,
    pub title: String,
    pub status: String,
    pub score: f64,
}

/// A book as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub rating: f64,
}
