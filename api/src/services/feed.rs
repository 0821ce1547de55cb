//! Feed orchestration: store first, then each provider in priority order
//!
//! Neither entry point fails. Store and provider errors are logged and
//! treated as "no videos from this source"; when every source comes up
//! empty the feed is an empty list.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::constants::FIRST_PAGE;
use crate::models::AppVideo;
use crate::services::providers::VideoProvider;
use crate::services::store::VideoStore;

/// Process-wide provider page counter, used when a client sends no page.
/// Concurrent requests share it, so pages are monotonic but not per-client.
#[derive(Debug)]
pub struct PageCursor {
    next: AtomicU32,
}

impl PageCursor {
    pub fn new(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }

    /// Take the current page and move the cursor forward by one
    pub fn advance(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    #[cfg(test)]
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(FIRST_PAGE)
    }
}

/// One page of feed output.
/// `next_page` is set only when providers were consulted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub videos: Vec<AppVideo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
}

pub struct FeedService {
    store: Arc<dyn VideoStore>,
    providers: Vec<Arc<dyn VideoProvider>>,
    cursor: PageCursor,
    page_size: u32,
}

impl FeedService {
    pub fn new(
        store: Arc<dyn VideoStore>,
        providers: Vec<Arc<dyn VideoProvider>>,
        page_size: u32,
    ) -> Self {
        Self {
            store,
            providers,
            cursor: PageCursor::default(),
            page_size,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Initial feed. Store rows win outright; otherwise fall back to providers.
    pub async fn fetch_global_videos(&self, page: Option<u32>) -> FeedPage {
        match self.store.get_all_videos().await {
            Ok(rows) if !rows.is_empty() => {
                return FeedPage {
                    videos: rows.into_iter().map(AppVideo::from).collect(),
                    next_page: None,
                };
            }
            Ok(_) => tracing::debug!("store has no videos, falling back to providers"),
            Err(e) => tracing::warn!(error = %e, "store failed, falling back to providers"),
        }

        self.fetch_external(page).await
    }

    /// "Load more": providers only, the store is never consulted
    pub async fn fetch_more_external_videos(&self, page: Option<u32>) -> FeedPage {
        self.fetch_external(page).await
    }

    async fn fetch_external(&self, page: Option<u32>) -> FeedPage {
        let page = page.unwrap_or_else(|| self.cursor.advance());
        let next_page = Some(page.saturating_add(1));

        for provider in &self.providers {
            match provider.fetch_page(page, self.page_size).await {
                Ok(videos) if !videos.is_empty() => {
                    tracing::info!(
                        provider = provider.name(),
                        page,
                        count = videos.len(),
                        "served feed page from provider"
                    );
                    return FeedPage { videos, next_page };
                }
                Ok(_) => {
                    tracing::debug!(provider = provider.name(), page, "provider returned no videos")
                }
                Err(e) => {
                    tracing::warn!(provider = provider.name(), page, error = %e, "provider fetch failed")
                }
            }
        }

        tracing::warn!(page, "all video sources empty, serving empty feed");
        FeedPage {
            videos: Vec::new(),
            next_page,
        }
    }
}
