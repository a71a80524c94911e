use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use vidrack_core::error::StorageError;
use vidrack_core::repository::{Repository, Result};
use vidrack_core::video::{Video, VideoId, VideoPatch};

const SCHEMA: &str = include_str!("../ddl/sqlite/videos.sql");

/// SQLite implementation of the repository contract.
///
/// Every operation is a single statement, so the store's row-level
/// atomicity carries the API's correctness: a duplicate id surfaces as a
/// primary-key violation on insert instead of a check-then-insert, partial
/// updates go through one `UPDATE ... RETURNING`, and the delete row count
/// decides presence.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Creates a repository from an existing SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new SQLite connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `videos` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

fn video_from_row(row: &SqliteRow) -> Result<Video> {
    let raw_id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
    let id =
        VideoId::new(raw_id).map_err(|e| StorageError::InvalidData(e.to_string()))?;
    let name: String = row.try_get("name").map_err(map_sqlx_error)?;
    let views: i64 = row.try_get("views").map_err(map_sqlx_error)?;
    let likes: i64 = row.try_get("likes").map_err(map_sqlx_error)?;

    Ok(Video {
        id,
        name,
        views,
        likes,
    })
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn get(&self, id: VideoId) -> Result<Option<Video>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, views, likes
            FROM videos
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(video_from_row).transpose()
    }

    async fn insert(&self, video: &Video) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO videos (id, name, views, likes)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(video.id.as_i64())
        .bind(video.name.as_str())
        .bind(video.views)
        .bind(video.likes)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(video.id.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn update(&self, id: VideoId, patch: &VideoPatch) -> Result<Option<Video>> {
        let row = sqlx::query(
            r#"
            UPDATE videos
            SET name = COALESCE(?, name),
                views = COALESCE(?, views),
                likes = COALESCE(?, likes)
            WHERE id = ?
            RETURNING id, name, views, likes
            "#,
        )
        .bind(patch.name.as_deref())
        .bind(patch.views)
        .bind(patch.likes)
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(video_from_row).transpose()
    }

    async fn delete(&self, id: VideoId) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM videos
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
