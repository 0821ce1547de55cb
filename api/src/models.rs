//! Shared data models used across modules

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A row of the `videos` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VideoRecord {
    pub id: i32,
    pub video_url: String,
    pub description: String,
    pub username: String,
    pub likes_count: i32,
    pub shares_count: i32,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

/// Unified video shape served by the feed endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVideo {
    pub id: String,
    pub video_url: String,
    pub description: String,
    pub username: String,
    pub likes_count: i64,
    pub shares_count: i64,
}

impl From<VideoRecord> for AppVideo {
    fn from(row: VideoRecord) -> Self {
        Self {
            id: row.id.to_string(),
            video_url: row.video_url,
            description: row.description,
            username: row.username,
            likes_count: row.likes_count.into(),
            shares_count: row.shares_count.into(),
        }
    }
}

/// Shape of `/api/videos`, which keeps the numeric store id
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyVideo {
    pub id: i32,
    pub video_url: String,
    pub description: String,
    pub username: String,
    pub likes_count: i32,
    pub shares_count: i32,
}

impl From<VideoRecord> for LegacyVideo {
    fn from(row: VideoRecord) -> Self {
        Self {
            id: row.id,
            video_url: row.video_url,
            description: row.description,
            username: row.username,
            likes_count: row.likes_count,
            shares_count: row.shares_count,
        }
    }
}

#[cfg(test)]
pub(crate) fn record(id: i32, username: &str) -> VideoRecord {
    VideoRecord {
        id,
        video_url: format!("https://cdn.example.com/{id}.mp4"),
        description: format!("video {id}"),
        username: username.to_string(),
        likes_count: id * 10,
        shares_count: id,
        created_at: Utc::now(),
    }
}
