//! Shared query parameter types for API handlers.

use serde::Deserialize;
use trackline_core::types::DbId;

use crate::error::AppError;

/// Optional `?id=` selector shared by lookup and delete endpoints.
///
/// The value is kept as a raw string so a malformed id surfaces as a
/// structured 400 instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Parse an id parameter into the store's identifier type.
pub fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid id '{raw}'")))
}
