//! External video-search providers
//!
//! Each provider fetches one page of search results and normalizes every item
//! into an [`AppVideo`]. Items are validated one at a time against the
//! provider's schema, so a single bad item is dropped without losing the page.

pub mod pexels;
pub mod pixabay;

use async_trait::async_trait;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use reqwest::Client;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{FALLBACK_USERNAME, SYNTH_LIKES, SYNTH_SHARES, TOPIC_CATEGORIES};
use crate::models::AppVideo;

pub use pexels::{PexelsProvider, PexelsVideo};
pub use pixabay::{PixabayHit, PixabayProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Reason a provider item was dropped during normalization
#[derive(Debug, Error)]
pub enum MalformedItem {
    #[error("item has no video_files list")]
    NoVideoFiles,

    #[error("item has no video asset")]
    NoAsset,

    #[error("chosen asset has no url")]
    MissingUrl,

    #[error("item has no usable rendition")]
    NoRenditions,

    #[error("item does not match provider schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// One search result from either provider, validated against its schema
#[derive(Debug)]
pub enum ProviderItem {
    Pexels(PexelsVideo),
    Pixabay(PixabayHit),
}

impl ProviderItem {
    pub fn normalize(self) -> Result<AppVideo, MalformedItem> {
        match self {
            ProviderItem::Pexels(video) => pexels::normalize(video),
            ProviderItem::Pixabay(hit) => pixabay::normalize(hit),
        }
    }
}

#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// False when the provider is configured off (no API key)
    fn enabled(&self) -> bool {
        true
    }

    /// Fetch and normalize one page of results.
    /// A provider without an API key returns an empty page.
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<AppVideo>, ProviderError>;
}

/// Shared outbound client for all providers
pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

pub fn pick_topic<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TOPIC_CATEGORIES.choose(rng).copied().unwrap_or("nature")
}

/// Lower-case an author name and strip all whitespace, falling back to a placeholder
pub fn normalize_username(name: Option<&str>) -> String {
    let normalized: String = name
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if normalized.is_empty() {
        FALLBACK_USERNAME.to_string()
    } else {
        normalized
    }
}

/// Like and share counts for items whose provider has no counters.
/// Seeded from the item identity so repeated fetches agree.
pub fn synthesized_counts(provider: &str, id: u64) -> (i64, i64) {
    let digest = Sha256::digest(format!("{provider}:{id}").as_bytes());
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);

    let mut rng = StdRng::from_seed(seed);
    (rng.random_range(SYNTH_LIKES), rng.random_range(SYNTH_SHARES))
}

/// Treat missing and blank strings alike
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate and normalize raw items, logging and dropping the ones that fail
pub(crate) fn normalize_page<T, F>(
    provider: &'static str,
    raw: Vec<serde_json::Value>,
    wrap: F,
) -> Vec<AppVideo>
where
    T: DeserializeOwned,
    F: Fn(T) -> ProviderItem,
{
    raw.into_iter()
        .filter_map(|value| {
            let normalized = serde_json::from_value::<T>(value)
                .map_err(MalformedItem::from)
                .and_then(|item| wrap(item).normalize());

            match normalized {
                Ok(video) => Some(video),
                Err(reason) => {
                    tracing::debug!(provider, %reason, "dropping provider item");
                    None
                }
            }
        })
        .collect()
}
