//! TuneDeck Service Client
//!
//! HTTP client for the remote music service that backs TuneDeck's song
//! lists and audio resolution.
//!
//! # Features
//!
//! - **Lists**: trending, most played, free-text search
//! - **Audio resolution**: exchange a video id for a playable URL
//! - **Lenient decoding**: missing list keys read as empty lists
//!
//! The client implements [`tune_core::AudioResolver`], so it can be handed
//! directly to the playback driver.
//!
//! # Example
//!
//! ```ignore
//! use tune_service_client::{MusicServiceClient, ServiceConfig};
//!
//! let client = MusicServiceClient::new(ServiceConfig::default())?;
//!
//! let trending = client.trending().await?;
//! println!("{} trending songs", trending.len());
//!
//! let url = client.audio_url(&trending[0].video_id).await?;
//! println!("Stream from {}", url);
//! ```

mod client;
mod error;
mod types;

pub use client::MusicServiceClient;
pub use error::{Result, ServiceClientError};
pub use types::{
    AudioUrlResponse, MostPlayedResponse, SearchResponse, ServiceConfig, TrendingResponse,
    DEFAULT_BASE_URL,
};
