use crate::types::DbId;

/// Domain-level errors shared across crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A collection field holds text that is not a valid JSON array of
    /// its item type. Surfaced on the write path; the read path may
    /// instead degrade the one section (see `codec::CollectionField`).
    #[error("Malformed collection '{field}': {reason}")]
    MalformedCollection { field: String, reason: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An uploaded file was refused (content type or size).
    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
