//! TuneDeck Library
//!
//! Host side of the TuneDeck music client: configuration, the song list
//! views fed by the music service, and a headless playback session.
//!
//! This library exposes the core components for testing purposes.

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types for convenience
pub use catalog::{recently_played, Catalog, Playlist, RECENTLY_PLAYED_LIMIT};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use session::{format_song_row, play_through};
