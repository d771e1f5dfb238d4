pub mod anime;
pub mod books;
pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos               GET (list / ?id=), POST, PATCH, DELETE
/// /todos/{id}/toggle   POST
/// /anime               GET (list / ?id=), POST, PATCH, DELETE
/// /books               GET (list / ?id= / ?title=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/todos", todos::router())
        .nest("/anime", anime::router())
        .nest("/books", books::router())
}
