//! Queue context for index-based navigation
//!
//! The queue is the ordered list a song was selected from (trending, most
//! played, search results). Navigation moves an index through it; the
//! list itself is never reordered.

use tune_core::Song;

/// Ordered songs plus the position of the current selection
#[derive(Debug, Clone, Default)]
pub struct QueueContext {
    songs: Vec<Song>,
    index: Option<usize>,
}

impl QueueContext {
    /// Build a queue positioned on `song`
    ///
    /// If `song` is not part of `songs`, the queue becomes that single song.
    pub fn select(song: &Song, songs: Vec<Song>) -> Self {
        match songs.iter().position(|s| s.video_id == song.video_id) {
            Some(index) => Self {
                songs,
                index: Some(index),
            },
            None => Self {
                songs: vec![song.clone()],
                index: Some(0),
            },
        }
    }

    /// Current position
    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// Move to `index` and return the song there
    pub fn jump_to(&mut self, index: usize) -> Option<&Song> {
        let song = self.songs.get(index)?;
        self.index = Some(index);
        Some(song)
    }

    /// Position after the current one, if any
    pub fn next_index(&self) -> Option<usize> {
        self.index
            .map(|i| i + 1)
            .filter(|&next| next < self.songs.len())
    }

    /// Position before the current one, if any
    pub fn previous_index(&self) -> Option<usize> {
        self.index.and_then(|i| i.checked_sub(1))
    }

    /// Replace the entry with the same id (used to cache resolved URLs)
    pub fn update(&mut self, song: &Song) {
        if let Some(entry) = self.songs.iter_mut().find(|s| s.video_id == song.video_id) {
            *entry = song.clone();
        }
    }

    /// All songs in order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
