//! Legacy store listing (/api/videos)

use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;

use crate::AppState;
use crate::models::LegacyVideo;
use crate::services::error::{ApiError, LogErr};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/videos", get(list_videos))
}

/// GET /api/videos - Store rows only, no provider fallback
async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LegacyVideo>>, ApiError> {
    let rows = state
        .store
        .get_all_videos()
        .await
        .log_500("Error fetching videos", "Failed to fetch videos")?;

    Ok(Json(rows.into_iter().map(LegacyVideo::from).collect()))
}
