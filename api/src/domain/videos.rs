//! Videos domain - DB queries for first-party video records
//!
//! All functions use the generic Executor pattern, allowing them to work with
//! both `&PgPool` (for standalone queries) and `&mut PgConnection` (for transactions).

use sqlx::{Executor, Postgres};

use crate::models::VideoRecord;

/// List every video, newest first
pub async fn list_videos<'e, E>(executor: E) -> Result<Vec<VideoRecord>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        SELECT id, video_url, description, username, likes_count, shares_count, created_at
        FROM videos
        ORDER BY id DESC
        "#,
    )
    .fetch_all(executor)
    .await
}
