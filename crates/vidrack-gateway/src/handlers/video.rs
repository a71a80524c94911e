use crate::error::{AppError, Result};
use crate::model::{CreateVideoRequest, UpdateVideoRequest, VideoResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;
use vidrack_core::{StorageError, Video, VideoId, VideoPatch};

/// Validates the `{id}` path segment into a [`VideoId`].
///
/// Rejections carry the extractor's own description of what went wrong
/// (non-numeric segment, overflow), out-of-range values carry ours.
fn parse_video_id(path: Result<Path<i64>, PathRejection>) -> Result<VideoId> {
    let Path(raw) = path?;
    Ok(VideoId::new(raw)?)
}

pub async fn get_video_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<VideoResponse>> {
    let id = parse_video_id(path)?;
    let video = state
        .repository()
        .get(id)
        .await?
        .ok_or_else(AppError::video_not_found)?;
    debug!(id = %id, "Fetched video");
    Ok(Json(VideoResponse::from(video)))
}

pub async fn create_video_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateVideoRequest>, JsonRejection>,
) -> Result<Response> {
    let id = parse_video_id(path)?;
    let Json(request) = payload?;
    let video = Video {
        id,
        name: request.name,
        views: request.views,
        likes: request.likes,
    };
    match state.repository().insert(&video).await {
        Ok(()) => {
            debug!(id = %id, "Created video");
            Ok((StatusCode::CREATED, Json(VideoResponse::from(video))).into_response())
        }
        Err(StorageError::Conflict(_)) => Err(AppError::id_taken()),
        Err(err) => Err(err.into()),
    }
}

pub async fn update_video_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateVideoRequest>, JsonRejection>,
) -> Result<Json<VideoResponse>> {
    let id = parse_video_id(path)?;
    let Json(request) = payload?;
    let patch = VideoPatch::from(request);
    let video = state
        .repository()
        .update(id, &patch)
        .await?
        .ok_or_else(AppError::cannot_update_missing)?;
    debug!(id = %id, "Updated video");
    Ok(Json(VideoResponse::from(video)))
}

pub async fn delete_video_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode> {
    let id = parse_video_id(path)?;
    let removed = state.repository().delete(id).await?;
    if !removed {
        return Err(AppError::video_not_found());
    }
    debug!(id = %id, "Deleted video");
    Ok(StatusCode::NO_CONTENT)
}
