use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use vidrack_core::error::StorageError;
use vidrack_core::repository::{Repository, Result};
use vidrack_core::video::{Video, VideoId, VideoPatch};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Inserts go through the entry API so the
/// taken-id check and the write happen under a single shard lock.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    videos: DashMap<VideoId, Video>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            videos: DashMap::new(),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn get(&self, id: VideoId) -> Result<Option<Video>> {
        Ok(self.videos.get(&id).map(|entry| entry.clone()))
    }

    async fn insert(&self, video: &Video) -> Result<()> {
        match self.videos.entry(video.id) {
            Entry::Occupied(_) => Err(StorageError::Conflict(video.id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(video.clone());
                Ok(())
            }
        }
    }

    async fn update(&self, id: VideoId, patch: &VideoPatch) -> Result<Option<Video>> {
        let Some(mut entry) = self.videos.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply(entry.value_mut());
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: VideoId) -> Result<bool> {
        Ok(self.videos.remove(&id).is_some())
    }
}
