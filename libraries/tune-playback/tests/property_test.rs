//! Property-based tests for the promotion rule

use proptest::prelude::*;
use tune_core::{Song, MOST_PLAYED_CAPACITY};
use tune_playback::{PlaybackConfig, PlaybackTracker, SilentMedia};
use tune_storage::MemoryStore;

fn tracker(store: &MemoryStore) -> PlaybackTracker {
    PlaybackTracker::new(
        PlaybackConfig::default(),
        Box::new(SilentMedia),
        Box::new(store.clone()),
    )
}

fn song(id: u8) -> Song {
    Song::new(format!("v{}", id), "", 100.0).with_audio_url(format!("https://cdn/{}", id))
}

proptest! {
    /// Any tick sequence promotes the track at most once, and exactly once
    /// if some tick reached the threshold
    #[test]
    fn promotion_is_idempotent(ticks in prop::collection::vec(0.0f64..=100.0, 1..40)) {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        tracker.select(song(1), vec![song(1)]).unwrap();
        let token = tracker.current_token();

        for &time in &ticks {
            tracker.on_progress_tick(token, time, 100.0);
        }

        let crossed = ticks.iter().any(|&t| t / 100.0 >= 0.75);
        let count = tracker
            .get_most_played()
            .songs()
            .iter()
            .filter(|s| s.video_id == "v1")
            .count();
        prop_assert_eq!(count, usize::from(crossed));
        prop_assert_eq!(store.save_count(), usize::from(crossed));
    }

    /// Listening to any sequence of tracks keeps the list capped, unique,
    /// and in sync with the store
    #[test]
    fn list_stays_bounded_and_unique(ids in prop::collection::vec(0u8..20, 0..60)) {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);

        for &id in &ids {
            tracker.select(song(id), vec![song(id)]).unwrap();
            let token = tracker.current_token();
            tracker.on_progress_tick(token, 90.0, 100.0);
        }

        let list = tracker.get_most_played().to_vec();
        prop_assert!(list.len() <= MOST_PLAYED_CAPACITY);

        let mut seen: Vec<_> = list.iter().map(|s| s.video_id.clone()).collect();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), list.len());

        if !ids.is_empty() {
            prop_assert_eq!(store.songs(), list);
        }
    }
}
