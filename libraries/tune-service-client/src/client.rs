//! Music service client.

use crate::error::{Result, ServiceClientError};
use crate::types::{
    AudioUrlResponse, MostPlayedResponse, SearchResponse, ServiceConfig, TrendingResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use tune_core::{AudioResolver, Song};

/// Client for the remote music service.
///
/// Every call is a single unauthenticated GET. Nothing is retried; callers
/// decide how to surface failures.
#[derive(Debug, Clone)]
pub struct MusicServiceClient {
    http: Client,
    base_url: String,
}

impl MusicServiceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("TuneDeck/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(url = %base_url, "Music service client ready");

        Ok(Self { http, base_url })
    }

    /// Normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Currently trending songs.
    pub async fn trending(&self) -> Result<Vec<Song>> {
        let resp: TrendingResponse = self.get("/get_trending_music", &[]).await?;
        debug!(count = resp.trending_music.len(), "Fetched trending");
        Ok(resp.trending_music)
    }

    /// Service-wide most played songs.
    pub async fn most_played(&self) -> Result<Vec<Song>> {
        let resp: MostPlayedResponse = self.get("/get_most_played_songs", &[]).await?;
        debug!(count = resp.most_played_songs.len(), "Fetched most played");
        Ok(resp.most_played_songs)
    }

    /// Free-text search.
    ///
    /// The query is trimmed; a blank query returns an empty list without
    /// contacting the service.
    pub async fn search(&self, query: &str) -> Result<Vec<Song>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let resp: SearchResponse = self.get("/search_music", &[("query", query)]).await?;
        debug!(query = %query, count = resp.search_results.len(), "Search complete");
        Ok(resp.search_results)
    }

    /// Resolve a video id into a playable audio URL.
    pub async fn audio_url(&self, video_id: &str) -> Result<String> {
        let resp: AudioUrlResponse = self.get("/get_audio", &[("videoId", video_id)]).await?;

        match resp.audio_url {
            Some(url) if !url.trim().is_empty() => {
                debug!(video_id = %video_id, "Resolved audio URL");
                Ok(url)
            }
            _ => Err(ServiceClientError::MissingAudioUrl(video_id.to_string())),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ServiceClientError::ServerUnreachable(e.to_string())
            } else {
                ServiceClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                ServiceClientError::ParseError(format!("Failed to parse {} response: {}", path, e))
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServiceClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl AudioResolver for MusicServiceClient {
    async fn resolve_audio(&self, video_id: &str) -> tune_core::Result<String> {
        Ok(self.audio_url(video_id).await?)
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ServiceClientError::InvalidUrl("URL cannot be empty".into()));
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ServiceClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    url::Url::parse(trimmed).map_err(|e| ServiceClientError::InvalidUrl(e.to_string()))?;

    Ok(trimmed.trim_end_matches('/').to_string())
}
