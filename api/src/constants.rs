//! Application constants

/// Topics a provider search is drawn from, one at random per call
pub const TOPIC_CATEGORIES: [&str; 5] = ["nature", "technology", "people", "street", "art"];

/// Number of videos requested from a provider per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// First page handed out by the shared cursor
pub const FIRST_PAGE: u32 = 1;

/// Outbound provider request timeout in seconds
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Placeholder description when a provider item has none
pub const FALLBACK_DESCRIPTION: &str = "Short video";

/// Placeholder username when a provider item has no author
pub const FALLBACK_USERNAME: &str = "creator";

/// Synthesized like counts fall in this range (providers without native counters)
pub const SYNTH_LIKES: std::ops::Range<i64> = 100..5100;

/// Synthesized share counts fall in this range
pub const SYNTH_SHARES: std::ops::Range<i64> = 10..610;

pub const PEXELS_BASE_URL: &str = "https://api.pexels.com";
pub const PIXABAY_BASE_URL: &str = "https://pixabay.com";
