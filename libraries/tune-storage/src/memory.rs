//! In-memory most-played store

use crate::error::StorageError;
use std::sync::{Arc, Mutex, MutexGuard};
use tune_core::{MostPlayedStore, Song, StoreError};

#[derive(Debug, Default)]
struct Inner {
    songs: Vec<Song>,
    saves: usize,
    fail_writes: bool,
}

/// Shared in-memory store
///
/// Clones share the same backing list, so a test can hand one clone to the
/// tracker and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `songs` (stored as given, unchecked)
    pub fn with_songs(songs: Vec<Song>) -> Self {
        let store = Self::new();
        store.lock().songs = songs;
        store
    }

    /// Current contents
    pub fn songs(&self) -> Vec<Song> {
        self.lock().songs.clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Make every following save fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave Inner half-written
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MostPlayedStore for MemoryStore {
    fn load(&self) -> Vec<Song> {
        self.songs()
    }

    fn save(&mut self, songs: &[Song]) -> std::result::Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::WriteFailed("memory store is read-only".into()).into());
        }
        inner.songs = songs.to_vec();
        inner.saves += 1;
        Ok(())
    }
}
