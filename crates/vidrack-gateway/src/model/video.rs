use serde::{Deserialize, Serialize};
use vidrack_core::{Video, VideoPatch};

/// Request body for `PUT /video/{id}`. All fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub name: String,
    pub views: i64,
    pub likes: i64,
}

/// Request body for `PATCH /video/{id}`.
///
/// Absent fields are left untouched; a supplied zero or empty string is
/// applied like any other value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVideoRequest {
    pub name: Option<String>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
}

impl From<UpdateVideoRequest> for VideoPatch {
    fn from(request: UpdateVideoRequest) -> Self {
        Self {
            name: request.name,
            views: request.views,
            likes: request.likes,
        }
    }
}

/// JSON shape of one video record.
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub id: i64,
    pub name: String,
    pub views: i64,
    pub likes: i64,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.as_i64(),
            name: video.name,
            views: video.views,
            likes: video.likes,
        }
    }
}
