//! Playback tracker - core orchestration
//!
//! Mediates between transport intents, the host media element, and the
//! most-played promotion rule.

use crate::{
    error::{PlaybackError, Result},
    events::{PlaybackEvent, AUDIO_LOAD_FAILED_MESSAGE},
    media::MediaElement,
    queue::QueueContext,
    shuffle::pick_other_index,
    types::{PlaybackConfig, PlaybackState, PlaybackStatus, RequestToken, ResolveRequest},
};
use tracing::{debug, info, warn};
use tune_core::{MostPlayedList, MostPlayedStore, Song};

/// Central playback tracking
///
/// Owns:
/// - Current selection and its queue context
/// - Status, elapsed time and duration
/// - Repeat and shuffle flags
/// - The most-played list and its store
///
/// The tracker does no I/O of its own. Selecting a song without an audio
/// URL returns a [`ResolveRequest`]; the host fetches the URL and hands the
/// outcome back through [`PlaybackTracker::complete_resolution`]. Media
/// callbacks arrive through the `on_*` methods. Both are stamped with a
/// [`RequestToken`] so results belonging to an earlier selection are ignored.
pub struct PlaybackTracker {
    // State
    status: PlaybackStatus,
    current_track: Option<Song>,
    pending: Option<Song>,
    token: RequestToken,
    elapsed: f64,
    total_duration: f64,

    // Navigation
    queue: QueueContext,
    repeat: bool,
    shuffle: bool,

    // Settings
    promotion_threshold: f64,
    skip_step: f64,

    // Collaborators
    media: Box<dyn MediaElement>,
    store: Box<dyn MostPlayedStore>,
    most_played: MostPlayedList,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackTracker {
    /// Create a tracker, loading the most-played list from `store`
    pub fn new(
        config: PlaybackConfig,
        media: Box<dyn MediaElement>,
        store: Box<dyn MostPlayedStore>,
    ) -> Self {
        let most_played = MostPlayedList::from_songs(store.load());
        debug!(entries = most_played.len(), "Loaded most played list");

        Self {
            status: PlaybackStatus::Idle,
            current_track: None,
            pending: None,
            token: RequestToken::default(),
            elapsed: 0.0,
            total_duration: 0.0,
            queue: QueueContext::default(),
            repeat: config.repeat,
            shuffle: config.shuffle,
            promotion_threshold: config.promotion_threshold,
            skip_step: config.skip_step,
            media,
            store,
            most_played,
            pending_events: Vec::new(),
        }
    }

    // ===== Selection =====

    /// Select `song` from the ordered `queue` it was picked in
    ///
    /// Returns `Ok(None)` when playback could start right away (the song
    /// already had an audio URL), or a [`ResolveRequest`] the host must
    /// fulfil before anything plays.
    pub fn select(&mut self, song: Song, queue: Vec<Song>) -> Result<Option<ResolveRequest>> {
        self.queue = QueueContext::select(&song, queue);
        self.begin(song)
    }

    /// Feed the outcome of a [`ResolveRequest`] back in
    ///
    /// Responses for anything but the latest selection are discarded.
    pub fn complete_resolution(
        &mut self,
        token: RequestToken,
        result: tune_core::Result<String>,
    ) -> Result<()> {
        if token != self.token {
            debug!(
                stale = token.value(),
                current = self.token.value(),
                "Discarding stale resolution"
            );
            return Ok(());
        }
        let Some(song) = self.pending.take() else {
            debug!(token = token.value(), "No resolution pending");
            return Ok(());
        };

        match result {
            Ok(url) if !url.trim().is_empty() => {
                let song = song.with_audio_url(url);
                self.queue.update(&song);
                self.start(song)
            }
            Ok(_) => Err(self.fail_resolution(&song, "service returned no audio URL")),
            Err(e) => Err(self.fail_resolution(&song, e.to_string())),
        }
    }

    /// Internal: reset state for a new selection
    fn begin(&mut self, song: Song) -> Result<Option<ResolveRequest>> {
        self.token = self.token.next();
        if self.current_track.take().is_some() {
            self.media.pause();
        }
        self.pending = None;
        self.elapsed = 0.0;
        self.total_duration = Self::usable_duration(song.duration).unwrap_or(0.0);
        self.set_status(PlaybackStatus::Loading);

        if song.has_audio_url() {
            self.start(song)?;
            return Ok(None);
        }

        debug!(video_id = %song.video_id, token = self.token.value(), "Audio URL needs resolving");
        let request = ResolveRequest {
            token: self.token,
            video_id: song.video_id.clone(),
        };
        self.pending = Some(song);
        Ok(Some(request))
    }

    /// Internal: load a resolved song into the media element and play it
    fn start(&mut self, song: Song) -> Result<()> {
        let Some(url) = song.audio_url.clone() else {
            return Err(self.fail_resolution(&song, "song has no audio URL"));
        };

        self.elapsed = 0.0;
        self.total_duration = Self::usable_duration(song.duration).unwrap_or(0.0);
        self.media.load(&url, self.token);

        info!(video_id = %song.video_id, title = %song.title, "Track loaded");
        self.emit_track_changed(song.video_id.clone());
        self.current_track = Some(song);

        self.play_media()
    }

    /// Internal: mark the pending selection as failed
    fn fail_resolution(&mut self, song: &Song, reason: impl Into<String>) -> PlaybackError {
        let reason = reason.into();
        warn!(video_id = %song.video_id, reason = %reason, "Audio resolution failed");

        self.current_track = None;
        self.pending = None;
        self.set_status(PlaybackStatus::Errored);
        self.emit_error(AUDIO_LOAD_FAILED_MESSAGE.to_string());

        PlaybackError::AudioResolution {
            video_id: song.video_id.clone(),
            reason,
        }
    }

    /// Internal: ask the media element to play
    ///
    /// A rejected start leaves the track loaded and paused so the user can
    /// retry with play/pause.
    fn play_media(&mut self) -> Result<()> {
        let started = self.media.play();
        self.apply_start(started)
    }

    /// Internal: settle status after the media element accepted or refused
    /// to start
    fn apply_start(&mut self, started: Result<()>) -> Result<()> {
        match started {
            Ok(()) => {
                self.set_status(PlaybackStatus::Playing);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Media element rejected playback start");
                self.set_status(PlaybackStatus::Paused);
                self.emit_error(e.to_string());
                Err(e)
            }
        }
    }

    // ===== Transport =====

    /// Flip between playing and paused
    ///
    /// From `Ended` this replays the current track from the start. Does
    /// nothing without a loaded track, or while loading or errored.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.current_track.is_none() {
            return Ok(());
        }

        match self.status {
            PlaybackStatus::Playing => {
                self.media.pause();
                self.set_status(PlaybackStatus::Paused);
                Ok(())
            }
            PlaybackStatus::Paused => self.play_media(),
            PlaybackStatus::Ended => self.restart(),
            PlaybackStatus::Idle | PlaybackStatus::Loading | PlaybackStatus::Errored => Ok(()),
        }
    }

    /// Seek to `target` seconds, clamped to the track length
    pub fn seek(&mut self, target: f64) -> Result<()> {
        if !target.is_finite() {
            return Err(PlaybackError::InvalidSeekPosition(target));
        }
        if self.current_track.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }

        let position = target.clamp(0.0, self.total_duration.max(0.0));
        self.elapsed = position;
        self.media.seek(position);
        Ok(())
    }

    /// Seek relative to the current position
    pub fn skip_relative(&mut self, delta: f64) -> Result<()> {
        self.seek(self.elapsed + delta)
    }

    /// Skip forward by the configured step (the "+10" control)
    pub fn skip_forward(&mut self) -> Result<()> {
        self.skip_relative(self.skip_step)
    }

    /// Skip back by the configured step (the "-10" control)
    pub fn skip_backward(&mut self) -> Result<()> {
        self.skip_relative(-self.skip_step)
    }

    /// Advance to the next track
    ///
    /// Repeat replays the current track. Shuffle picks a random other track.
    /// Otherwise moves one step forward; past the last track playback stops
    /// with status `Ended` and the last track stays current.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<ResolveRequest>> {
        if self.repeat {
            if self.current_track.is_some() {
                self.restart()?;
            }
            return Ok(None);
        }

        self.advance()
    }

    /// Go back one track in the queue (no-op on the first track)
    pub fn previous(&mut self) -> Result<Option<ResolveRequest>> {
        match self.queue.previous_index() {
            Some(index) => self.play_index(index),
            None => Ok(None),
        }
    }

    /// Internal: shuffle or sequential advance
    fn advance(&mut self) -> Result<Option<ResolveRequest>> {
        let Some(current) = self.queue.current_index() else {
            return Ok(None);
        };

        let next = if self.shuffle && self.queue.len() > 1 {
            pick_other_index(&mut rand::thread_rng(), self.queue.len(), current)
        } else {
            self.queue.next_index()
        };

        match next {
            Some(index) => self.play_index(index),
            None => {
                self.finish_queue();
                Ok(None)
            }
        }
    }

    /// Internal: select the queue entry at `index`
    fn play_index(&mut self, index: usize) -> Result<Option<ResolveRequest>> {
        let song = self
            .queue
            .jump_to(index)
            .cloned()
            .ok_or(PlaybackError::QueueEmpty)?;
        self.begin(song)
    }

    /// Internal: replay the current track from the start
    ///
    /// A failed media source stays failed until the next selection.
    fn restart(&mut self) -> Result<()> {
        if self.status == PlaybackStatus::Errored {
            debug!("Not restarting a track that failed");
            return Ok(());
        }
        self.elapsed = 0.0;
        let started = self.media.restart();
        self.apply_start(started)
    }

    /// Internal: stop at the end of the queue
    fn finish_queue(&mut self) {
        if self.status == PlaybackStatus::Playing {
            self.media.pause();
        }
        if let Some(song) = self.pending.take() {
            debug!(video_id = %song.video_id, "Dropping in-flight resolution");
            self.token = self.token.next();
        }
        info!(queue_len = self.queue.len(), "Reached end of queue");
        self.set_status(PlaybackStatus::Ended);
    }

    // ===== Media callbacks =====

    /// Media time update
    ///
    /// Updates the position and promotes the track once progress reaches
    /// the threshold. A track already in the most-played list is left
    /// where it is.
    pub fn on_progress_tick(&mut self, token: RequestToken, current_time: f64, duration: f64) {
        if !self.is_current(token) || !current_time.is_finite() {
            return;
        }

        if let Some(duration) = Self::usable_duration(duration) {
            self.total_duration = duration;
        }
        self.elapsed = if self.total_duration > 0.0 {
            current_time.clamp(0.0, self.total_duration)
        } else {
            current_time.max(0.0)
        };

        self.check_promotion();
    }

    /// Media metadata loaded; the element's duration wins over the song's
    pub fn on_loaded_metadata(&mut self, token: RequestToken, duration: f64) {
        if !self.is_current(token) {
            return;
        }
        if let Some(duration) = Self::usable_duration(duration) {
            self.total_duration = duration;
        }
    }

    /// Media reached the end of the current track
    pub fn on_ended(&mut self, token: RequestToken) -> Result<Option<ResolveRequest>> {
        if !self.is_current(token) {
            return Ok(None);
        }

        if self.repeat {
            self.restart()?;
            return Ok(None);
        }

        self.advance()
    }

    /// Media element reported a playback error
    pub fn on_media_error(&mut self, token: RequestToken, message: impl Into<String>) {
        if !self.is_current(token) {
            return;
        }

        let message = message.into();
        warn!(error = %message, "Media element error");
        self.set_status(PlaybackStatus::Errored);
        self.emit_error(message);
    }

    /// Internal: whether a callback belongs to the loaded track
    fn is_current(&self, token: RequestToken) -> bool {
        if token != self.token {
            debug!(
                stale = token.value(),
                current = self.token.value(),
                "Ignoring stale media callback"
            );
            return false;
        }
        self.current_track.is_some()
    }

    /// Internal: durations from media elements can be NaN or infinite
    fn usable_duration(duration: f64) -> Option<f64> {
        (duration.is_finite() && duration > 0.0).then_some(duration)
    }

    // ===== Most played =====

    /// Internal: apply the promotion rule to the current track
    fn check_promotion(&mut self) {
        let Some(track) = self.current_track.as_ref() else {
            return;
        };
        if self.total_duration <= 0.0 {
            return;
        }

        let ratio = self.elapsed / self.total_duration;
        if ratio < self.promotion_threshold || self.most_played.contains(&track.video_id) {
            return;
        }

        // Resolved URLs expire; keep the stored copy unresolved
        let song = Song {
            audio_url: None,
            ..track.clone()
        };
        let video_id = song.video_id.clone();

        if self.most_played.promote(song) {
            info!(video_id = %video_id, ratio, "Promoted to most played");
            self.persist_most_played();
            self.pending_events.push(PlaybackEvent::Promoted { video_id });
        }
    }

    /// Internal: write the list back; failures are logged and dropped
    fn persist_most_played(&mut self) {
        if let Err(e) = self.store.save(&self.most_played.to_vec()) {
            warn!(error = %e, "Failed to persist most played list");
        }
    }

    /// Most-played list, most recent first
    pub fn get_most_played(&self) -> &MostPlayedList {
        &self.most_played
    }

    // ===== Shuffle & Repeat =====

    /// Set repeat flag
    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    /// Flip repeat flag, returning the new value
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    /// Get repeat flag
    pub fn get_repeat(&self) -> bool {
        self.repeat
    }

    /// Set shuffle flag
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    /// Flip shuffle flag, returning the new value
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    /// Get shuffle flag
    pub fn get_shuffle(&self) -> bool {
        self.shuffle
    }

    // ===== State Queries =====

    /// Snapshot of the playback state
    pub fn get_state(&self) -> PlaybackState {
        PlaybackState {
            current_track: self.current_track.clone(),
            status: self.status,
            elapsed: self.elapsed,
            total_duration: self.total_duration,
            repeat: self.repeat,
            shuffle: self.shuffle,
        }
    }

    /// Get current status
    pub fn get_status(&self) -> PlaybackStatus {
        self.status
    }

    /// Get currently loaded track
    pub fn get_current_track(&self) -> Option<&Song> {
        self.current_track.as_ref()
    }

    /// Seconds into the current track
    pub fn get_elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Length of the current track in seconds
    pub fn get_total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Token of the latest selection
    ///
    /// Hosts tag media callbacks with the token passed to
    /// [`MediaElement::load`]; this is the same value.
    pub fn current_token(&self) -> RequestToken {
        self.token
    }

    /// Songs in the active queue
    pub fn get_queue(&self) -> &[Song] {
        self.queue.songs()
    }

    /// Position of the current selection in the queue
    pub fn get_queue_index(&self) -> Option<usize> {
        self.queue.current_index()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain. The host should
    /// call this after each operation or callback.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Queue a position update event
    pub fn emit_position_update(&mut self) {
        if self.current_track.is_some() {
            self.pending_events.push(PlaybackEvent::PositionUpdate {
                elapsed: self.elapsed,
                duration: self.total_duration,
            });
        }
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.status != status {
            debug!(from = ?self.status, to = ?status, "Status changed");
            self.status = status;
            self.pending_events
                .push(PlaybackEvent::StatusChanged { status });
        }
    }

    fn emit_track_changed(&mut self, video_id: String) {
        self.pending_events
            .push(PlaybackEvent::TrackChanged { video_id });
    }

    fn emit_error(&mut self, message: String) {
        self.pending_events.push(PlaybackEvent::Error { message });
    }
}
