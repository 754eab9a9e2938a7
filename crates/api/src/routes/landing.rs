//! Route definitions for the `/landings` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::landing;
use crate::state::AppState;

/// Routes mounted at `/landings`.
///
/// ```text
/// GET    /              -> list (public)
/// POST   /              -> create (auth)
/// GET    /{id}          -> get_by_id (public)
/// PUT    /{id}          -> update (auth)
/// DELETE /{id}          -> delete (auth)
/// GET    /{id}/view     -> view (public, reconstructed)
/// PATCH  /{id}/status   -> set_status (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing::list).post(landing::create))
        .route(
            "/{id}",
            get(landing::get_by_id)
                .put(landing::update)
                .delete(landing::delete),
        )
        .route("/{id}/view", get(landing::view))
        .route("/{id}/status", patch(landing::set_status))
}
