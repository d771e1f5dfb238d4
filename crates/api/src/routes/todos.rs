//! Route definitions for the todo list resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes mounted at `/todos`.
///
/// ```text
/// GET    /             -> lookup (list, or single record via ?id=)
/// POST   /             -> create
/// PATCH  /             -> update (id in body)
/// DELETE /             -> remove (id via query or body)
/// POST   /{id}/toggle  -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(todos::lookup)
                .post(todos::create)
                .patch(todos::update)
                .delete(todos::remove),
        )
        .route("/{id}/toggle", post(todos::toggle))
}
