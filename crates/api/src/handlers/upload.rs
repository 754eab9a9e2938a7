//! Handler for the image upload endpoint.
//!
//! The store never holds binary content, only URLs: an upload lands in a
//! flat write-once directory keyed by upload time and the stable URL is
//! returned for the editor to embed in the landing record.

use std::path::Path as FsPath;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use landex_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Image content types accepted by the upload endpoint.
const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Response for `POST /upload`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/v1/upload
///
/// Accept a single `image` field, reject non-image content types and
/// oversized payloads, and write the file under the uploads directory
/// with a timestamp suffix so names never collide.
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .ok_or_else(|| AppError::Core(CoreError::UploadRejected("No file submitted".into())))?;

    let content_type = field.content_type().unwrap_or_default().to_string();
    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::Core(CoreError::UploadRejected(format!(
            "Content type '{content_type}' is not an accepted image type"
        ))));
    }

    let original_name = field.file_name().unwrap_or("image").to_string();

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::Core(CoreError::UploadRejected(format!(
            "File exceeds the {} byte limit",
            state.config.max_upload_bytes
        ))));
    }

    let filename = timestamped_filename(&original_name, chrono::Utc::now().timestamp_millis());

    tokio::fs::create_dir_all(&state.config.uploads_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create uploads dir: {e}")))?;

    let dest = state.config.uploads_dir.join(&filename);
    tokio::fs::write(&dest, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

    tracing::info!(file = %filename, bytes = data.len(), "image uploaded");

    Ok(Json(UploadResponse {
        url: format!("{}/uploads/{filename}", state.config.public_base_url),
    }))
}

/// Build `{stem}_{timestamp}{ext}` from the submitted name, keeping only
/// filesystem-safe characters in the stem.
fn timestamped_filename(original: &str, timestamp_millis: i64) -> String {
    let path = FsPath::new(original);
    let stem: String = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    let stem = if stem.is_empty() { "image".to_string() } else { stem };
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{stem}_{timestamp_millis}{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_gets_timestamp_suffix() {
        assert_eq!(
            timestamped_filename("logo.png", 1700000000000),
            "logo_1700000000000.png"
        );
    }

    #[test]
    fn filename_is_sanitized() {
        assert_eq!(
            timestamped_filename("../etc/pass wd.svg", 42),
            "passwd_42.svg"
        );
        assert_eq!(timestamped_filename("...", 42), "image_42");
    }
}
