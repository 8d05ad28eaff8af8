//! TuneDeck - Playback Tracking
//!
//! Platform-agnostic playback tracking for TuneDeck.
//!
//! This crate provides:
//! - Track selection with lazy audio URL resolution
//! - Transport controls (play/pause, seek, ±10s skip, next/previous)
//! - Shuffle and repeat
//! - Most-played promotion once a track passes 75% progress
//! - Stale-result protection through per-selection request tokens
//!
//! # Architecture
//!
//! `tune-playback` is completely host-agnostic:
//! - No HTTP client (resolution goes through `tune_core::AudioResolver`)
//! - No storage backend (the most-played list goes through
//!   `tune_core::MostPlayedStore`)
//! - No audio output (the host provides a `MediaElement`)
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use tune_playback::{PlaybackConfig, PlaybackStatus, PlaybackTracker, SilentMedia};
//! use tune_core::{MostPlayedStore, Song, StoreError};
//!
//! struct NoStore;
//!
//! impl MostPlayedStore for NoStore {
//!     fn load(&self) -> Vec<Song> {
//!         Vec::new()
//!     }
//!
//!     fn save(&mut self, _songs: &[Song]) -> Result<(), StoreError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut tracker = PlaybackTracker::new(
//!     PlaybackConfig::default(),
//!     Box::new(SilentMedia),
//!     Box::new(NoStore),
//! );
//!
//! let song = Song::new("abc", "Song", 200.0);
//! let request = tracker.select(song.clone(), vec![song]).unwrap().unwrap();
//! assert_eq!(tracker.get_status(), PlaybackStatus::Loading);
//!
//! // The host fetches the URL and reports back
//! tracker
//!     .complete_resolution(request.token, Ok("https://cdn.example.com/abc.m4a".into()))
//!     .unwrap();
//! assert_eq!(tracker.get_status(), PlaybackStatus::Playing);
//!
//! // Media time updates drive the most-played rule
//! let token = tracker.current_token();
//! tracker.on_progress_tick(token, 160.0, 200.0);
//! assert!(tracker.get_most_played().contains("abc"));
//! ```

mod error;
mod events;
mod media;
mod player;
mod queue;
mod shuffle;
mod tracker;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, AUDIO_LOAD_FAILED_MESSAGE};
pub use media::{MediaElement, SilentMedia};
pub use player::Player;
pub use queue::QueueContext;
pub use tracker::PlaybackTracker;
pub use types::{
    PlaybackConfig, PlaybackState, PlaybackStatus, RequestToken, ResolveRequest,
    DEFAULT_PROMOTION_THRESHOLD, DEFAULT_SKIP_STEP,
};
