/// Core traits for TuneDeck
use crate::error::{Result, StoreError};
use crate::types::Song;
use async_trait::async_trait;

/// Resolves a video id into a playable audio URL
///
/// Implemented by the remote service client. The playback driver awaits this
/// once per selection of a song that has no `audio_url` yet.
#[async_trait]
pub trait AudioResolver: Send + Sync {
    /// Fetch a playable URL for `video_id`
    ///
    /// # Errors
    /// Returns an error if the service fails or returns no URL
    async fn resolve_audio(&self, video_id: &str) -> Result<String>;
}

/// Durable storage for the most-played list
///
/// The list is stored as a whole, most recent first. Implementations must
/// never fail on load: absent or malformed data reads as an empty list.
pub trait MostPlayedStore: Send {
    /// Load the persisted list (empty if absent or corrupt)
    fn load(&self) -> Vec<Song>;

    /// Overwrite the persisted list
    ///
    /// # Errors
    /// Returns an error if the write fails; callers treat this as non-fatal
    fn save(&mut self, songs: &[Song]) -> std::result::Result<(), StoreError>;
}
