//! Feed endpoints (/api/feed, /api/feed/next)

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;
use crate::services::error::ApiError;
use crate::services::feed::FeedPage;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/feed", get(global_feed))
        .route("/api/feed/next", get(next_page))
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    /// Provider page echoed back from a previous `nextPage`.
    /// Without it the shared cursor picks the page.
    page: Option<u32>,
}

const BAD_PAGE: &str = "page must be a positive integer";

/// Resolve the optional page, rejecting malformed or zero values as JSON 400s
fn requested_page(
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Option<u32>, ApiError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "rejected feed query");
        ApiError::bad_request(BAD_PAGE)
    })?;

    match query.page {
        Some(0) => Err(ApiError::bad_request(BAD_PAGE)),
        page => Ok(page),
    }
}

/// GET /api/feed - Store videos, or a provider page when the store has none
async fn global_feed(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Json<FeedPage>, ApiError> {
    let page = requested_page(query)?;
    Ok(Json(state.feed.fetch_global_videos(page).await))
}

/// GET /api/feed/next - Next provider page for infinite scroll
async fn next_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Json<FeedPage>, ApiError> {
    let page = requested_page(query)?;
    Ok(Json(state.feed.fetch_more_external_videos(page).await))
}
