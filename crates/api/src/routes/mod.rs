pub mod auth;
pub mod health;
pub mod landing;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/google                 login / register (public)
/// /auth/verify                 token check (requires auth)
/// /auth/profile                current admin (requires auth)
///
/// /landings                    list (public), create (auth)
/// /landings/{id}               get (public), update / delete (auth)
/// /landings/{id}/view          reconstructed public view
/// /landings/{id}/status        activate / deactivate (auth)
///
/// /upload                      single-image upload (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/landings", landing::router())
        .merge(upload::router())
}
