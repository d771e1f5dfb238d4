//! Route definitions for the anime watchlist resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::anime;
use crate::state::AppState;

/// Anime routes mounted at `/anime`.
///
/// ```text
/// GET    / -> lookup (list, or single record via ?id=)
/// POST   / -> create
/// PATCH  / -> update (id in body)
/// DELETE / -> remove (id via query or body)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(anime::lookup)
            .post(anime::create)
            .patch(anime::update)
            .delete(anime::remove),
    )
}
