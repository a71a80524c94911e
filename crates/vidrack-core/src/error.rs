use thiserror::Error;

/// Errors related to the core domain types of the video catalog.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid video id: {0}")]
    InvalidVideoId(String),
}

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("video id already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}
