use crate::error::StorageError;
use crate::video::{Video, VideoId, VideoPatch};
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Persistence contract for video records.
///
/// The store is the sole source of truth. Implementations must provide
/// row-level atomicity for each operation and must not rely on
/// check-then-write sequences: a duplicate insert surfaces as
/// [`StorageError::Conflict`] from the store itself.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Retrieves the video record for a given id.
    /// Returns `None` if the id does not exist.
    async fn get(&self, id: VideoId) -> Result<Option<Video>>;

    /// Inserts a new video record. Returns `Err(Conflict)` if the id is
    /// already taken.
    async fn insert(&self, video: &Video) -> Result<()>;

    /// Overwrites only the fields supplied by the patch and returns the
    /// updated record. Returns `None` if the id does not exist.
    async fn update(&self, id: VideoId, patch: &VideoPatch) -> Result<Option<Video>>;

    /// Deletes the video record for a given id.
    /// Returns `true` if the record existed and was removed.
    async fn delete(&self, id: VideoId) -> Result<bool>;
}
