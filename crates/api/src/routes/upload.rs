//! Route definition for the image upload endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at the API root.
///
/// ```text
/// POST /upload -> upload_image (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(upload::upload_image))
}
