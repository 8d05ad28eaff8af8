//! Wire types for the music service API.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tune_core::Song;

/// Public deployment of the music service
pub const DEFAULT_BASE_URL: &str = "https://music-lib-s8zi.onrender.com";

/// Connection settings for the music service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL, e.g. `https://music.example.com`
    pub base_url: String,

    /// Whole-request timeout
    pub timeout: Duration,

    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl ServiceConfig {
    /// Config for `base_url` with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// `GET /get_trending_music`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub trending_music: Vec<Song>,
}

/// `GET /get_most_played_songs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MostPlayedResponse {
    #[serde(default, alias = "most_played_music")]
    pub most_played_songs: Vec<Song>,
}

/// `GET /search_music`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub search_results: Vec<Song>,
}

/// `GET /get_audio`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioUrlResponse {
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_list_key_is_empty() {
        let resp: TrendingResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.trending_music.is_empty());
    }

    #[test]
    fn most_played_accepts_alias() {
        let resp: MostPlayedResponse =
            serde_json::from_str(r#"{"most_played_music": [{"videoId": "a"}]}"#).unwrap();
        assert_eq!(resp.most_played_songs.len(), 1);
    }

    #[test]
    fn audio_url_may_be_null() {
        let resp: AudioUrlResponse = serde_json::from_str(r#"{"audioUrl": null}"#).unwrap();
        assert_eq!(resp.audio_url, None);
    }
}
