//! Provider A: Pexels video search

use async_trait::async_trait;
use reqwest::{Client, Url, header::AUTHORIZATION};
use serde::Deserialize;

use super::{
    MalformedItem, ProviderError, ProviderItem, VideoProvider, non_empty, normalize_page,
    normalize_username, pick_topic, synthesized_counts,
};
use crate::config::ProviderConfig;
use crate::constants::FALLBACK_DESCRIPTION;
use crate::models::AppVideo;

const NAME: &str = "pexels";

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    videos: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsVideo {
    pub id: u64,
    /// Canonical page URL, e.g. `https://www.pexels.com/video/city-at-night-123/`
    pub url: Option<String>,
    pub user: Option<PexelsUser>,
    pub video_files: Option<Vec<PexelsVideoFile>>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsUser {
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsVideoFile {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub file_type: Option<String>,
    pub link: Option<String>,
    pub file: Option<String>,
}

impl PexelsVideoFile {
    fn is_vertical(&self) -> bool {
        matches!((self.width, self.height), (Some(w), Some(h)) if h > w)
    }

    fn is_mp4(&self) -> bool {
        self.file_type
            .as_deref()
            .is_some_and(|t| t.to_ascii_lowercase().contains("mp4"))
    }
}

#[derive(Clone)]
pub struct PexelsProvider {
    http: Client,
    config: ProviderConfig,
}

impl PexelsProvider {
    pub fn new(http: Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl VideoProvider for PexelsProvider {
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
        let url = format!("{}/videos/search", self.config.base_url);

        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, api_key)
            .query(&[
                ("query", topic.to_string()),
                ("orientation", "portrait".to_string()),
                ("size", "small".to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status()));
        }

        let body: SearchPage = resp.json().await?;
        Ok(normalize_page(NAME, body.videos, ProviderItem::Pexels))
    }
}

/// Map one Pexels video to the unified shape.
///
/// The asset is the shortest vertical MP4 file, or the first file when no
/// vertical MP4 exists.
pub fn normalize(video: PexelsVideo) -> Result<AppVideo, MalformedItem> {
    let files = video.video_files.ok_or(MalformedItem::NoVideoFiles)?;

    let chosen = files
        .iter()
        .filter(|f| f.is_vertical() && f.is_mp4())
        .min_by_key(|f| f.height.unwrap_or(0))
        .or_else(|| files.first())
        .ok_or(MalformedItem::NoAsset)?;

    let video_url = non_empty(chosen.link.clone())
        .or_else(|| non_empty(chosen.file.clone()))
        .ok_or(MalformedItem::MissingUrl)?;

    let description = non_empty(video.url)
        .as_deref()
        .and_then(trailing_segment)
        .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

    let author = video
        .user
        .and_then(|u| non_empty(u.name).or_else(|| non_empty(u.username)));

    let (likes_count, shares_count) = synthesized_counts(NAME, video.id);

    Ok(AppVideo {
        id: video.id.to_string(),
        video_url,
        description,
        username: normalize_username(author.as_deref()),
        likes_count,
        shares_count,
    })
}

fn trailing_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .path_segments()?
        .filter(|s| !s.is_empty())
        .last()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SYNTH_LIKES, SYNTH_SHARES};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn video(value: serde_json::Value) -> PexelsVideo {
        serde_json::from_value(value).unwrap()
    }

    fn file(width: u32, height: u32, file_type: &str, link: &str) -> serde_json::Value {
        json!({ "width": width, "height": height, "file_type": file_type, "link": link })
    }

    #[test]
    fn test_picks_smallest_vertical_mp4() {
        let v = video(json!({
            "id": 1,
            "video_files": [
                file(1080, 1920, "video/mp4", "https://v.example/1920.mp4"),
                file(270, 480, "video/mp4", "https://v.example/480.mp4"),
                file(405, 720, "video/mp4", "https://v.example/720.mp4"),
            ]
        }));
        assert_eq!(normalize(v).unwrap().video_url, "https://v.example/480.mp4");
    }

    #[test]
    fn test_ignores_landscape_and_non_mp4_when_choosing_vertical() {
        let v = video(json!({
            "id": 2,
            "video_files": [
                file(1920, 1080, "video/mp4", "https://v.example/landscape.mp4"),
                file(200, 360, "video/webm", "https://v.example/small.webm"),
                file(540, 960, "VIDEO/MP4", "https://v.example/960.mp4"),
            ]
        }));
        assert_eq!(normalize(v).unwrap().video_url, "https://v.example/960.mp4");
    }

    #[test]
    fn test_falls_back_to_first_asset_without_mp4() {
        let v = video(json!({
            "id": 3,
            "video_files": [
                file(720, 1280, "video/webm", "https://v.example/first.webm"),
                file(360, 640, "video/webm", "https://v.example/second.webm"),
            ]
        }));
        assert_eq!(normalize(v).unwrap().video_url, "https://v.example/first.webm");
    }

    #[test]
    fn test_uses_file_when_link_missing() {
        let v = video(json!({
            "id": 4,
            "video_files": [{ "width": 10, "height": 20, "file_type": "video/mp4", "file": "https://v.example/f.mp4" }]
        }));
        assert_eq!(normalize(v).unwrap().video_url, "https://v.example/f.mp4");
    }

    #[test]
    fn test_drops_items_without_assets() {
        let missing = video(json!({ "id": 5 }));
        assert!(matches!(normalize(missing), Err(MalformedItem::NoVideoFiles)));

        let empty = video(json!({ "id": 6, "video_files": [] }));
        assert!(matches!(normalize(empty), Err(MalformedItem::NoAsset)));

        let no_url = video(json!({ "id": 7, "video_files": [{ "file_type": "video/mp4" }] }));
        assert!(matches!(normalize(no_url), Err(MalformedItem::MissingUrl)));
    }

    #[test]
    fn test_description_and_username() {
        let v = video(json!({
            "id": 8,
            "url": "https://www.pexels.com/video/waves-crashing-on-rocks-856/",
            "user": { "name": "Ocean Lover" },
            "video_files": [file(10, 20, "video/mp4", "https://v.example/8.mp4")]
        }));
        let app = normalize(v).unwrap();
        assert_eq!(app.id, "8");
        assert_eq!(app.description, "waves-crashing-on-rocks-856");
        assert_eq!(app.username, "oceanlover");
        assert!(SYNTH_LIKES.contains(&app.likes_count));
        assert!(SYNTH_SHARES.contains(&app.shares_count));
    }

    #[test]
    fn test_placeholders_when_metadata_missing() {
        let v = video(json!({
            "id": 9,
            "url": "",
            "user": { "name": "", "username": "Backup Handle" },
            "video_files": [file(10, 20, "video/mp4", "https://v.example/9.mp4")]
        }));
        let app = normalize(v).unwrap();
        assert_eq!(app.description, "Short video");
        assert_eq!(app.username, "backuphandle");

        let bare = video(json!({
            "id": 10,
            "video_files": [file(10, 20, "video/mp4", "https://v.example/10.mp4")]
        }));
        assert_eq!(normalize(bare).unwrap().username, "creator");
    }

    fn provider(server: &MockServer, key: Option<&str>) -> PexelsProvider {
        let http = crate::services::providers::http_client(Duration::from_secs(5)).unwrap();
        PexelsProvider::new(http, ProviderConfig::new(key.map(String::from), server.uri()))
    }

    #[tokio::test]
    async fn test_fetch_page_sends_key_and_paging() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos/search"))
            .and(header("authorization", "pexels-key"))
            .and(query_param("page", "3"))
            .and(query_param("per_page", "10"))
            .and(query_param("orientation", "portrait"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 3,
                "videos": [
                    {
                        "id": 11,
                        "video_files": [{ "width": 10, "height": 20, "file_type": "video/mp4", "link": "https://v.example/11.mp4" }]
                    },
                    { "id": 12, "video_files": [] }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let videos = provider(&server, Some("pexels-key")).fetch_page(3, 10).await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "11");
    }

    #[tokio::test]
    async fn test_fetch_page_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = provider(&server, Some("k")).fetch_page(1, 10).await.unwrap_err();
        assert!(matches!(err, ProviderError::Status(s) if s.as_u16() == 429));
    }

    #[tokio::test]
    async fn test_disabled_without_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let disabled = provider(&server, None);
        assert!(!disabled.enabled());
        assert!(disabled.fetch_page(1, 10).await.unwrap().is_empty());
    }
}
