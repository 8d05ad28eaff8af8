//! Bounded, recency-ordered most-played list

use crate::types::Song;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of entries kept in the most-played list
pub const MOST_PLAYED_CAPACITY: usize = 10;

/// Most-played songs, most recently promoted first
///
/// Holds at most [`MOST_PLAYED_CAPACITY`] songs with no duplicate
/// `video_id`. Insertion order is recency order: promoting a song moves it
/// to the front and the oldest entry falls off the back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Song>", into = "Vec<Song>")]
pub struct MostPlayedList {
    /// Songs (most recent = front)
    songs: VecDeque<Song>,
}

impl MostPlayedList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            songs: VecDeque::with_capacity(MOST_PLAYED_CAPACITY),
        }
    }

    /// Build a list from persisted data
    ///
    /// Stored data is not trusted: the first occurrence of a duplicate id
    /// wins and anything past the capacity is dropped.
    pub fn from_songs(songs: impl IntoIterator<Item = Song>) -> Self {
        let mut list = Self::new();
        for song in songs {
            if list.songs.len() >= MOST_PLAYED_CAPACITY {
                break;
            }
            if !list.contains(&song.video_id) {
                list.songs.push_back(song);
            }
        }
        list
    }

    /// Move `song` to the front
    ///
    /// Any existing entry with the same id is removed first, then the list
    /// is truncated to capacity. Returns `true` if the list changed.
    pub fn promote(&mut self, song: Song) -> bool {
        if self.songs.front() == Some(&song) {
            return false;
        }

        self.songs.retain(|s| s.video_id != song.video_id);
        self.songs.push_front(song);
        self.songs.truncate(MOST_PLAYED_CAPACITY);
        true
    }

    /// Check whether a song with this id is present
    pub fn contains(&self, video_id: &str) -> bool {
        self.songs.iter().any(|s| s.video_id == video_id)
    }

    /// First `n` entries (the "recently played" strip)
    pub fn recent(&self, n: usize) -> Vec<&Song> {
        self.songs.iter().take(n).collect()
    }

    /// All entries, most recent first
    pub fn songs(&self) -> Vec<&Song> {
        self.songs.iter().collect()
    }

    /// Copy of all entries, most recent first
    pub fn to_vec(&self) -> Vec<Song> {
        self.songs.iter().cloned().collect()
    }

    /// Consume the list, returning entries most recent first
    pub fn into_songs(self) -> Vec<Song> {
        self.songs.into()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl From<Vec<Song>> for MostPlayedList {
    fn from(songs: Vec<Song>) -> Self {
        Self::from_songs(songs)
    }
}

impl From<MostPlayedList> for Vec<Song> {
    fn from(list: MostPlayedList) -> Self {
        list.into_songs()
    }
}
