use landex_core::error::CoreError;

/// Errors surfaced by the repositories.
///
/// A `Database` failure inside a transaction aborts it (the transaction
/// rolls back on drop), so no partial landing row is ever visible.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A collection field could not be encoded/decoded.
    #[error(transparent)]
    Codec(#[from] CoreError),

    /// The backing store failed; callers should treat this as retryable
    /// and distinct from "not found".
    #[error("Store failure: {0}")]
    Database(#[from] sqlx::Error),
}
