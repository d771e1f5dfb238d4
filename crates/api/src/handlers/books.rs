//! Handlers for the read-only book shelf.
//!
//! One lookup endpoint serves three shapes: the full list, a single
//! record by `?id=`, and a case-insensitive `?title=` substring search.
//! An id parameter takes precedence when both are supplied.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use trackline_core::error::CoreError;
use trackline_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::query::parse_id;
use crate::state::AppState;

/// Query parameters for book lookup.
#[derive(Debug, serde::Deserialize)]
pub struct BookQuery {
    pub id: Option<String>,
    pub title: Option<String>,
}

/// GET /books, GET /books?id=N, GET /books?title=...
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<BookQuery>,
) -> AppResult<Response> {
    if let Some(raw) = params.id.as_deref() {
        let id = parse_id(raw)?;
        let book = BookRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
        return Ok(Json(book).into_response());
    }

    if let Some(title) = params.title.as_deref() {
        let books = BookRepo::search_by_title(&state.pool, title).await?;
        return Ok(Json(books).into_response());
    }

    let books = BookRepo::list(&state.pool).await?;
    Ok(Json(books).into_response())
}
