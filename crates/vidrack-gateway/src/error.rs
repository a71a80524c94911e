use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use vidrack_core::{CoreError, StorageError};

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Request-local errors for the video API.
///
/// Every variant terminates a single request with the matching status code
/// and a `{"message": ...}` JSON body; none are fatal to the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// 404 for lookups and deletes against an absent record.
    pub fn video_not_found() -> Self {
        Self::NotFound("Could not find video with that id".to_string())
    }

    /// 404 for updates against an absent record.
    pub fn cannot_update_missing() -> Self {
        Self::NotFound("Video doesn't exist, cannot update".to_string())
    }

    /// 409 for creates against a taken id.
    pub fn id_taken() -> Self {
        Self::Conflict("Video id taken...".to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::Storage(err) => {
                error!(error = %err, "storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal storage error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
