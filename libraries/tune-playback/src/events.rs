//! Playback Events
//!
//! Event-based communication for UI synchronization. Events are queued by
//! the tracker and drained by the host:
//! - Status changes (loading/playing/paused/ended/errored)
//! - Track changes
//! - Most-played promotions
//! - Position updates (on request)
//! - Transient errors for inline display

use crate::types::PlaybackStatus;
use serde::{Deserialize, Serialize};

/// Message shown when a track's audio cannot be resolved
pub const AUDIO_LOAD_FAILED_MESSAGE: &str = "Failed to load audio, try again";

/// Events emitted by the playback tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Playback status changed
    StatusChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A new track is loaded into the media element
    TrackChanged {
        /// ID of the new track
        video_id: String,
    },

    /// A track was promoted to the front of the most-played list
    Promoted {
        /// ID of the promoted track
        video_id: String,
    },

    /// Position update (emitted when the host asks for one)
    PositionUpdate {
        /// Seconds into the track
        elapsed: f64,
        /// Track length in seconds
        duration: f64,
    },

    /// Non-fatal error to show inline
    Error {
        /// User-facing message
        message: String,
    },
}
