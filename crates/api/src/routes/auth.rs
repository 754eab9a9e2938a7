//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /google   -> google_login (public)
/// GET  /verify   -> verify (requires auth)
/// GET  /profile  -> profile (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/google", post(auth::google_login))
        .route("/verify", get(auth::verify))
        .route("/profile", get(auth::profile))
}
