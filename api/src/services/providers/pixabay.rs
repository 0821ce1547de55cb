//! Provider B: Pixabay video search

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{
    MalformedItem, ProviderError, ProviderItem, VideoProvider, non_empty, normalize_page,
    normalize_username, pick_topic, synthesized_counts,
};
use crate::config::ProviderConfig;
use crate::constants::FALLBACK_DESCRIPTION;
use crate::models::AppVideo;

const NAME: &str = "pixabay";

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    hits: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct PixabayHit {
    pub id: u64,
    /// Comma separated tag list, used as the description
    pub tags: Option<String>,
    pub user: Option<String>,
    pub likes: Option<i64>,
    pub downloads: Option<i64>,
    pub videos: Option<PixabayRenditions>,
}

#[derive(Debug, Deserialize)]
pub struct PixabayRenditions {
    pub large: Option<PixabayRendition>,
    pub medium: Option<PixabayRendition>,
    pub small: Option<PixabayRendition>,
}

#[derive(Debug, Deserialize)]
pub struct PixabayRendition {
    pub url: Option<String>,
}

#[derive(Clone)]
pub struct PixabayProvider {
    http: Client,
    config: ProviderConfig,
}

impl PixabayProvider {
    pub fn new(http: Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl VideoProvider for PixabayProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<AppVideo>, ProviderError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Ok(Vec::new());
        };

        let topic = pick_topic(&mut rand::rng());
        let url = format!("{}/api/videos/", self.config.base_url);

        let resp = self
            .http
            .get(url)
            .query(&[
                ("key", api_key.to_string()),
                ("q", topic.to_string()),
                ("orientation", "vertical".to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status()));
        }

        let body: SearchPage = resp.json().await?;
        Ok(normalize_page(NAME, body.hits, ProviderItem::Pixabay))
    }
}

/// Map one Pixabay hit to the unified shape.
///
/// Only the largest rendition present is considered; if it has no URL the
/// hit is dropped rather than trying a smaller one.
pub fn normalize(hit: PixabayHit) -> Result<AppVideo, MalformedItem> {
    let renditions = hit.videos.ok_or(MalformedItem::NoRenditions)?;
    let chosen = renditions
        .large
        .or(renditions.medium)
        .or(renditions.small)
        .ok_or(MalformedItem::NoRenditions)?;
    let video_url = non_empty(chosen.url).ok_or(MalformedItem::MissingUrl)?;

    let (synth_likes, synth_shares) = synthesized_counts(NAME, hit.id);

    Ok(AppVideo {
        id: hit.id.to_string(),
        video_url,
        description: non_empty(hit.tags).unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
        username: normalize_username(non_empty(hit.user).as_deref()),
        likes_count: hit.likes.unwrap_or(synth_likes),
        shares_count: hit.downloads.unwrap_or(synth_shares),
    })
}
