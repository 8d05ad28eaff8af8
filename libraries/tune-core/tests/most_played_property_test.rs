//! Property-based tests for the most-played list
//!
//! Uses proptest to check the bounded-recency invariants across random
//! promotion sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use tune_core::{MostPlayedList, Song, MOST_PLAYED_CAPACITY};

fn song(id: u8) -> Song {
    Song::new(format!("vid{}", id), format!("Song {}", id), 200.0)
}

proptest! {
    /// Property: the list never exceeds capacity and never holds duplicates
    #[test]
    fn bounded_and_unique(ids in prop::collection::vec(0u8..30, 0..200)) {
        let mut list = MostPlayedList::new();
        for id in ids {
            list.promote(song(id));

            prop_assert!(list.len() <= MOST_PLAYED_CAPACITY);
            let unique: HashSet<_> = list.songs().iter().map(|s| s.video_id.clone()).collect();
            prop_assert_eq!(unique.len(), list.len());
        }
    }

    /// Property: the last promoted song is always at the front
    #[test]
    fn last_promoted_is_first(ids in prop::collection::vec(0u8..30, 1..100)) {
        let mut list = MostPlayedList::new();
        for id in &ids {
            list.promote(song(*id));
        }

        let last = format!("vid{}", ids[ids.len() - 1]);
        prop_assert_eq!(&list.songs()[0].video_id, &last);
    }

    /// Property: order matches "distinct ids by most recent promotion"
    #[test]
    fn order_is_recency(ids in prop::collection::vec(0u8..15, 0..100)) {
        let mut list = MostPlayedList::new();
        for id in &ids {
            list.promote(song(*id));
        }

        let mut expected = Vec::new();
        for id in ids.iter().rev() {
            let vid = format!("vid{}", id);
            if !expected.contains(&vid) {
                expected.push(vid);
            }
        }
        expected.truncate(MOST_PLAYED_CAPACITY);

        let actual: Vec<String> = list.songs().iter().map(|s| s.video_id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: loading stored data always yields a valid list
    #[test]
    fn from_songs_always_valid(ids in prop::collection::vec(0u8..30, 0..60)) {
        let list = MostPlayedList::from_songs(ids.into_iter().map(song));

        prop_assert!(list.len() <= MOST_PLAYED_CAPACITY);
        let unique: HashSet<_> = list.songs().iter().map(|s| s.video_id.clone()).collect();
        prop_assert_eq!(unique.len(), list.len());
    }
}
