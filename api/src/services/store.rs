//! Store accessor over the `videos` table

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::domain::videos;
use crate::models::VideoRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Read access to first-party videos
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// All records ordered by id descending
    async fn get_all_videos(&self) -> Result<Vec<VideoRecord>, StoreError>;
}

/// Postgres-backed store. Each call checks a connection out of the pool
/// and returns it when the query future completes or is dropped.
#[derive(Clone)]
pub struct PgVideoStore {
    db: PgPool,
}

impl PgVideoStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn get_all_videos(&self) -> Result<Vec<VideoRecord>, StoreError> {
        let mut conn = self.db.acquire().await?;
        let rows = videos::list_videos(&mut *conn).await?;
        Ok(rows)
    }
}
