//! Error types for playback tracking

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The service returned no playable URL, or the request failed
    #[error("Failed to resolve audio for {video_id}: {reason}")]
    AudioResolution {
        /// Track that could not be resolved
        video_id: String,
        /// Underlying failure
        reason: String,
    },

    /// The media element refused to start playback
    #[error("Playback start rejected: {0}")]
    PlaybackStart(String),

    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Queue is empty
    #[error("Queue is empty")]
    QueueEmpty,

    /// Invalid seek position
    #[error("Invalid seek position: {0}")]
    InvalidSeekPosition(f64),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
