//! Handlers for the todo list resource.
//!
//! Lookup and delete accept the target id via the `?id=` query parameter;
//! delete also accepts a JSON body `{"id": N}` for older callers. The
//! toggle endpoint inverts `completed` in the store so the server, not
//! the client, decides the resulting value.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use trackline_core::error::CoreError;
use trackline_core::todo::validate_todo_text;
use trackline_core::types::DbId;
use trackline_db::models::todo::{CreateTodo, UpdateTodo};
use trackline_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::query::{parse_id, IdQuery};
use crate::state::AppState;

/// Body payload for DELETE requests that carry the id in JSON.
#[derive(Debug, serde::Deserialize)]
pub struct DeleteBody {
    pub id: Option<DbId>,
}

/// GET /todos and GET /todos?id=N
///
/// Without `id`: the full list, ordered by id ascending (empty list is
/// `[]`, never an error). With `id`: exactly one record or 404.
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> AppResult<Response> {
    match params.id.as_deref() {
        Some(raw) => {
            let id = parse_id(raw)?;
            let todo = TodoRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
            Ok(Json(todo).into_response())
        }
        None => {
            let todos = TodoRepo::list(&state.pool).await?;
            Ok(Json(todos).into_response())
        }
    }
}

/// POST /todos
///
/// Create a todo. Whitespace-only text is rejected before any statement
/// runs; the response carries the full record with its assigned id.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    validate_todo_text(&input.text).map_err(CoreError::Validation)?;

    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /todos
///
/// Partial update: the body carries `id` plus the fields to change.
/// Absent fields keep their stored values; a body with no mutable
/// fields is a 400 rather than a no-op write.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .ok_or_else(|| AppError::BadRequest("Missing id".to_string()))?;

    if !input.has_changes() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    if let Some(ref text) = input.text {
        validate_todo_text(text).map_err(CoreError::Validation)?;
    }

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(todo))
}

/// POST /todos/{id}/toggle
///
/// Invert `completed` atomically in the store and return the result.
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::toggle(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, completed = todo.completed, "Todo toggled");

    Ok(Json(todo))
}

/// DELETE /todos?id=N (or body `{"id": N}`)
///
/// The query parameter wins when both are supplied. The response is the
/// deleted record's prior state so callers can reconcile without a
/// follow-up read.
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

    let todo = TodoRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(todo))
}
