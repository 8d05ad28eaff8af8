//! TuneDeck Storage
//!
//! Durable storage for the most-played list.
//!
//! The list is small (at most ten songs) and always written as a whole, so
//! it lives in a single JSON document rather than a database:
//!
//! - **`JsonFileStore`**: one JSON file, replaced atomically on every save
//! - **`MemoryStore`**: shared in-memory list for tests and throwaway sessions
//!
//! Both implement `tune_core::MostPlayedStore`. Loading never fails: a
//! missing or malformed file reads as an empty list.
//!
//! # Example
//!
//! ```rust,no_run
//! use tune_core::{MostPlayedStore, Song};
//! use tune_storage::JsonFileStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = JsonFileStore::open_default()?;
//! store.save(&[Song::new("abc", "Song", 200.0)])?;
//!
//! assert_eq!(store.load().len(), 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod json_file;
mod memory;

pub use error::{Result, StorageError};
pub use json_file::{JsonFileStore, DEFAULT_FILE_NAME};
pub use memory::MemoryStore;
