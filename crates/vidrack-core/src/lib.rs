//! Core types and traits for the Vidrack video catalog service.
//!
//! This crate provides the shared domain types and the repository
//! contract used by both the storage backends and the HTTP gateway.

pub mod error;
pub mod repository;
pub mod video;

pub use error::{CoreError, StorageError};
pub use repository::Repository;
pub use video::{Video, VideoId, VideoPatch};
