use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const MIN_ID: i64 = 1;

/// A validated video identifier.
///
/// Ids are caller-supplied positive integers; uniqueness is enforced by
/// the store, not by this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct VideoId(i64);

impl VideoId {
    /// Creates a new `VideoId` after validating that the value is positive.
    pub fn new(id: i64) -> Result<Self, CoreError> {
        if id < MIN_ID {
            return Err(CoreError::InvalidVideoId(format!(
                "must be a positive integer, got {}",
                id
            )));
        }
        Ok(Self(id))
    }

    /// Returns the id as a raw integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for VideoId {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VideoId> for i64 {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored video record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Caller-supplied primary key.
    pub id: VideoId,
    /// Title of the video.
    pub name: String,
    /// View counter.
    pub views: i64,
    /// Like counter.
    pub likes: i64,
}

/// A partial update for a video record.
///
/// Only fields that are present are overwritten. Presence is explicit: a
/// supplied zero or empty string is applied like any other value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPatch {
    pub name: Option<String>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
}

impl VideoPatch {
    /// Applies the patch to a record in place.
    pub fn apply(&self, video: &mut Video) {
        if let Some(name) = &self.name {
            video.name = name.clone();
        }
        if let Some(views) = self.views {
            video.views = views;
        }
        if let Some(likes) = self.likes {
            video.likes = likes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: i64) -> Video {
        Video {
            id: VideoId::new(id).unwrap(),
            name: "intro".to_string(),
            views: 100,
            likes: 10,
        }
    }

    #[test]
    fn valid_ids() {
        assert!(VideoId::new(1).is_ok());
        assert!(VideoId::new(i64::MAX).is_ok());
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        assert!(VideoId::new(0).is_err());
        assert!(VideoId::new(-1).is_err());
    }

    #[test]
    fn id_deserialization_validates() {
        let id: VideoId = serde_json::from_str("7").unwrap();
        assert_eq!(id.as_i64(), 7);

        assert!(serde_json::from_str::<VideoId>("0").is_err());
        assert!(serde_json::from_str::<VideoId>("-3").is_err());
    }

    #[test]
    fn record_serializes_as_flat_object() {
        let json = serde_json::to_value(video(1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "intro", "views": 100, "likes": 10})
        );
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut v = video(1);
        let patch = VideoPatch {
            likes: Some(50),
            ..VideoPatch::default()
        };

        patch.apply(&mut v);

        assert_eq!(v.name, "intro");
        assert_eq!(v.views, 100);
        assert_eq!(v.likes, 50);
    }

    #[test]
    fn patch_applies_zero_values() {
        let mut v = video(1);
        let patch = VideoPatch {
            name: Some(String::new()),
            views: Some(0),
            likes: Some(0),
        };

        patch.apply(&mut v);

        assert_eq!(v.name, "");
        assert_eq!(v.views, 0);
        assert_eq!(v.likes, 0);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut v = video(1);
        VideoPatch::default().apply(&mut v);
        assert_eq!(v, video(1));
    }
}
