//! Handlers for the anime watchlist resource.
//!
//! The watch-status enumeration is enforced here, at the handler
//! boundary, on both create and update; the store never sees a value
//! outside the allowed set.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use trackline_core::anime::{validate_status, validate_title};
use trackline_core::error::CoreError;
use trackline_core::types::DbId;
use trackline_db::models::anime::{CreateAnimeEntry, UpdateAnimeEntry};
use trackline_db::repositories::AnimeRepo;

use crate::error::{AppError, AppResult};
use crate::query::{parse_id, IdQuery};
use crate::state::AppState;

/// Body payload for DELETE requests that carry the id in JSON.
#[derive(Debug, serde::Deserialize)]
pub struct DeleteBody {
    pub id: Option<DbId>,
}

/// GET /anime and GET /anime?id=N
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> AppResult<Response> {
    match params.id.as_deref() {
        Some(raw) => {
            let id = parse_id(raw)?;
            let entry = AnimeRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Anime", id }))?;
            Ok(Json(entry).into_response())
        }
        None => {
            let entries = AnimeRepo::list(&state.pool).await?;
            Ok(Json(entries).into_response())
        }
    }
}

/// POST /anime
///
/// Add an entry to the watchlist. Title and status are validated before
/// any statement runs.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAnimeEntry>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(CoreError::Validation)?;
    validate_status(&input.status).map_err(CoreError::Validation)?;

    let entry = AnimeRepo::create(&state.pool, &input).await?;

    tracing::info!(anime_id = entry.id, status = %entry.status, "Anime entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// PATCH /anime
///
/// Partial update: the body carries `id` plus the fields to change.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateAnimeEntry>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("Missing id".to_string()))?;

    if !input.has_changes() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    if let Some(ref title) = input.title {
        validate_title(title).map_err(CoreError::Validation)?;
    }
    if let Some(ref status) = input.status {
        validate_status(status).map_err(CoreError::Validation)?;
    }

    let entry = AnimeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Anime", id }))?;

    tracing::info!(anime_id = id, "Anime entry updated");

    Ok(Json(entry))
}

/// DELETE /anime?id=N (or body `{"id": N}`)
pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
    body: Option<Json<DeleteBody>>,
) -> AppResult<impl IntoResponse> {
    let id = match params.id.as_deref() {
        Some(raw) => parse_id(raw)?,
        None => body
            .and_then(|Json(b)| b.id)
            .ok_or_else(|| AppError::BadRequest("Missing id".to_string()))?,
    };

    let entry = AnimeRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Anime", id }))?;

    tracing::info!(anime_id = id, "Anime entry deleted");

    Ok(Json(entry))
}
