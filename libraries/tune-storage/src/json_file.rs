//! JSON file backed most-played store

use crate::error::{Result, StorageError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tune_core::{MostPlayedStore, Song, StoreError};

/// File name used under the platform data directory
pub const DEFAULT_FILE_NAME: &str = "most_played.json";

const APP_DIR: &str = "tunedeck";

/// Most-played list stored as a JSON array in a single file
///
/// Saves write a sibling temp file and rename it over the target, so a
/// crash mid-write leaves the previous list intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at an explicit path (parent directories are created on save)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/tunedeck/most_played.json`
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Default location under the platform data directory
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(base.join(APP_DIR).join(DEFAULT_FILE_NAME))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Song>> {
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn write(&self, songs: &[Song]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let json = serde_json::to_vec_pretty(songs)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StorageError::Io(e.error))?;

        Ok(())
    }
}

impl MostPlayedStore for JsonFileStore {
    fn load(&self) -> Vec<Song> {
        match self.read() {
            Ok(songs) => {
                debug!(path = %self.path.display(), count = songs.len(), "Loaded most played");
                songs
            }
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable most played file");
                Vec::new()
            }
        }
    }

    fn save(&mut self, songs: &[Song]) -> std::result::Result<(), StoreError> {
        self.write(songs)?;
        debug!(path = %self.path.display(), count = songs.len(), "Saved most played");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_file_name() {
        if let Ok(path) = JsonFileStore::default_path() {
            assert!(path.ends_with(Path::new(APP_DIR).join(DEFAULT_FILE_NAME)));
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(store.load().is_empty());
    }
}
