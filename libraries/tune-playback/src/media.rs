//! Platform-agnostic media element trait
//!
//! Abstracts the host's playback primitive (an HTML audio element, a native
//! player, a test double). The tracker is its only owner.

use crate::error::Result;
use crate::types::RequestToken;

/// Host media playback primitive
///
/// The tracker issues commands through this trait. The host reports back
/// through the tracker's `on_*` callbacks, tagging each callback with the
/// token it received in [`MediaElement::load`].
pub trait MediaElement: Send {
    /// Point the element at a new source
    ///
    /// Callbacks for this source must carry `token`.
    fn load(&mut self, url: &str, token: RequestToken);

    /// Start or resume playback
    ///
    /// # Returns
    /// * `Ok(())` - Playback started
    /// * `Err(_)` - Start rejected (autoplay policy, decode failure, etc.)
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Jump to `position` seconds
    fn seek(&mut self, position: f64);

    /// Jump to the start and play
    fn restart(&mut self) -> Result<()> {
        self.seek(0.0);
        self.play()
    }
}

/// Media element that accepts every command and plays nothing
///
/// Useful for hosts without audio output and for tests that only care
/// about tracker state.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentMedia;

impl MediaElement for SilentMedia {
    fn load(&mut self, _url: &str, _token: RequestToken) {}

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek(&mut self, _position: f64) {}
}
