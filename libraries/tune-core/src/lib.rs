//! TuneDeck Core
//!
//! Platform-agnostic types, traits, and error handling shared by every
//! TuneDeck crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song` and the bounded `MostPlayedList`
//! - **Core Traits**: `AudioResolver` (turns a video id into a playable URL)
//!   and `MostPlayedStore` (durable most-played persistence)
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tune_core::{MostPlayedList, Song};
//!
//! let mut list = MostPlayedList::new();
//! list.promote(Song::new("dQw4w9WgXcQ", "Never Gonna Give You Up", 213.0));
//!
//! assert!(list.contains("dQw4w9WgXcQ"));
//! assert_eq!(list.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod time;
pub mod traits;
pub mod types;

pub use error::{CoreError, Result, StoreError};
pub use time::format_time;
pub use traits::{AudioResolver, MostPlayedStore};
pub use types::{MostPlayedList, Song, MOST_PLAYED_CAPACITY};
