//! Async driver that pairs the tracker with an audio resolver

use crate::{
    error::Result,
    tracker::PlaybackTracker,
    types::{RequestToken, ResolveRequest},
};
use std::sync::Arc;
use tracing::debug;
use tune_core::{AudioResolver, Song};

/// Playback tracker plus the resolver that feeds it audio URLs
///
/// Operations that may select a new track await resolution before
/// returning, so callers see the final state. Everything else goes through
/// [`Player::tracker`] / [`Player::tracker_mut`].
pub struct Player {
    tracker: PlaybackTracker,
    resolver: Arc<dyn AudioResolver>,
}

impl Player {
    /// Create a player around an existing tracker
    pub fn new(tracker: PlaybackTracker, resolver: Arc<dyn AudioResolver>) -> Self {
        Self { tracker, resolver }
    }

    /// Select `song` from `queue`, resolving its audio URL if needed
    pub async fn select(&mut self, song: Song, queue: Vec<Song>) -> Result<()> {
        let request = self.tracker.select(song, queue)?;
        self.resolve(request).await
    }

    /// Advance to the next track
    pub async fn next(&mut self) -> Result<()> {
        let request = self.tracker.next()?;
        self.resolve(request).await
    }

    /// Go back one track
    pub async fn previous(&mut self) -> Result<()> {
        let request = self.tracker.previous()?;
        self.resolve(request).await
    }

    /// Media reached the end of the track tagged `token`
    pub async fn on_ended(&mut self, token: RequestToken) -> Result<()> {
        let request = self.tracker.on_ended(token)?;
        self.resolve(request).await
    }

    /// Borrow the tracker
    pub fn tracker(&self) -> &PlaybackTracker {
        &self.tracker
    }

    /// Borrow the tracker mutably (transport controls, media callbacks)
    pub fn tracker_mut(&mut self) -> &mut PlaybackTracker {
        &mut self.tracker
    }

    /// Unwrap the tracker
    pub fn into_tracker(self) -> PlaybackTracker {
        self.tracker
    }

    async fn resolve(&mut self, request: Option<ResolveRequest>) -> Result<()> {
        let Some(request) = request else {
            return Ok(());
        };

        debug!(video_id = %request.video_id, "Resolving audio URL");
        let result = self.resolver.resolve_audio(&request.video_id).await;
        self.tracker.complete_resolution(request.token, result)
    }
}
