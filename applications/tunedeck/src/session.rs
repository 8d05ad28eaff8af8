//! Headless playback session
//!
//! Drives a [`Player`] without an audio device: the track's timeline is
//! stepped through as media progress ticks so the most-played rule runs
//! exactly as it would under a real media element.

use crate::error::Result;
use tracing::{debug, warn};
use tune_core::{format_time, Song};
use tune_playback::{PlaybackEvent, PlaybackStatus, Player};

/// Select `song` and tick through it until it ends
///
/// `step` is the simulated interval between progress ticks, in seconds.
/// Returns every event the tracker emitted along the way. Resolution and
/// start failures end the session early instead of erroring.
pub async fn play_through(
    player: &mut Player,
    song: Song,
    queue: Vec<Song>,
    step: f64,
) -> Result<Vec<PlaybackEvent>> {
    let mut events = Vec::new();

    // Failures surface as Error events and an Errored or Paused status
    let selected = player.select(song, queue).await;
    events.extend(player.tracker_mut().drain_events());

    if let Err(e) = selected {
        warn!(error = %e, "Track did not start");
        return Ok(events);
    }
    if player.tracker().get_status() != PlaybackStatus::Playing {
        return Ok(events);
    }

    let token = player.tracker().current_token();
    let duration = player.tracker().get_total_duration();
    if duration <= 0.0 || step <= 0.0 {
        warn!(duration, "Unknown track length, nothing to play through");
        return Ok(events);
    }

    let mut elapsed = 0.0;
    while elapsed < duration {
        elapsed = (elapsed + step).min(duration);
        let tracker = player.tracker_mut();
        tracker.on_progress_tick(token, elapsed, duration);
        tracker.emit_position_update();
        events.extend(tracker.drain_events());
    }

    debug!(elapsed, "Reached end of track");
    player.on_ended(token).await?;
    events.extend(player.tracker_mut().drain_events());

    Ok(events)
}

/// One list row: `title  mm:ss  plays  videoId`
pub fn format_song_row(song: &Song) -> String {
    let title = if song.title.is_empty() {
        "(untitled)"
    } else {
        song.title.as_str()
    };
    format!(
        "{}  {}  {}  {}",
        title,
        format_time(song.duration),
        song.play_count,
        song.video_id
    )
}
