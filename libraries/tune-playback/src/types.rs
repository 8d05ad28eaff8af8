//! Core types for playback tracking

use serde::{Deserialize, Serialize};
use tune_core::Song;

/// Default progress ratio at which a track is promoted to most played
pub const DEFAULT_PROMOTION_THRESHOLD: f64 = 0.75;

/// Default step for the relative skip controls, in seconds
pub const DEFAULT_SKIP_STEP: f64 = 10.0;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Nothing selected yet
    #[default]
    Idle,

    /// Resolving or loading the selected track
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Reached the end of the queue
    Ended,

    /// Resolution or media failure; only a new selection recovers
    Errored,
}

/// Identity of one selection
///
/// Every selection gets a fresh token. Resolution responses and media
/// callbacks carry the token they were issued for, and anything that does
/// not match the current token is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw token value
    pub fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Audio URL the host must fetch before playback can start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Token to pass back to `complete_resolution`
    pub token: RequestToken,

    /// Track to resolve
    pub video_id: String,
}

/// Snapshot of the tracker state for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Track currently loaded (None while resolving or after a failure)
    pub current_track: Option<Song>,

    /// Playback status
    pub status: PlaybackStatus,

    /// Seconds into the current track
    pub elapsed: f64,

    /// Track length in seconds (media metadata, falling back to the song)
    pub total_duration: f64,

    /// Replay the current track when it ends
    pub repeat: bool,

    /// Pick the next track at random
    pub shuffle: bool,
}

/// Configuration for the playback tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Progress ratio that promotes a track (default: 0.75)
    pub promotion_threshold: f64,

    /// Seconds moved by the relative skip controls (default: 10)
    pub skip_step: f64,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// Initial repeat flag (default: false)
    pub repeat: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            promotion_threshold: DEFAULT_PROMOTION_THRESHOLD,
            skip_step: DEFAULT_SKIP_STEP,
            shuffle: false,
            repeat: false,
        }
    }
}
