//! Route definitions for the read-only book shelf.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book routes mounted at `/books`. Lookup only; mutating verbs 405.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(books::lookup))
}
