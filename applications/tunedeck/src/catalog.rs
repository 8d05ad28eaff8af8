//! Song list views backed by the music service
//!
//! The catalog owns the lists a user browses: trending, the service-wide
//! most played list, search results and favourites. A failed fetch leaves
//! the affected list empty and is logged; it never propagates.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tune_core::{MostPlayedList, Song};
use tune_service_client::MusicServiceClient;

/// Entries shown in the "recently played" strip
pub const RECENTLY_PLAYED_LIMIT: usize = 3;

/// Browsable playlists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Playlist {
    #[default]
    Trending,
    MostPlayed,
    /// No backing endpoint yet, always empty
    Favourites,
}

impl Playlist {
    pub fn label(&self) -> &'static str {
        match self {
            Playlist::Trending => "Trending",
            Playlist::MostPlayed => "Most Played",
            Playlist::Favourites => "Favourites",
        }
    }
}

/// Song lists fetched from the music service
pub struct Catalog {
    client: MusicServiceClient,
    trending: Vec<Song>,
    most_played: Vec<Song>,
    search_results: Vec<Song>,
    last_query: Option<String>,
    selected: Playlist,
}

impl Catalog {
    pub fn new(client: MusicServiceClient) -> Self {
        Self {
            client,
            trending: Vec::new(),
            most_played: Vec::new(),
            search_results: Vec::new(),
            last_query: None,
            selected: Playlist::default(),
        }
    }

    /// Refetch trending songs
    pub async fn refresh_trending(&mut self) -> &[Song] {
        self.trending = match self.client.trending().await {
            Ok(songs) => songs,
            Err(e) => {
                warn!(error = %e, "Failed to fetch trending songs");
                Vec::new()
            }
        };
        &self.trending
    }

    /// Refetch the service-wide most played list
    pub async fn refresh_most_played(&mut self) -> &[Song] {
        self.most_played = match self.client.most_played().await {
            Ok(songs) => songs,
            Err(e) => {
                warn!(error = %e, "Failed to fetch most played songs");
                Vec::new()
            }
        };
        &self.most_played
    }

    /// Refetch both service lists concurrently
    pub async fn refresh(&mut self) {
        let (trending, most_played) =
            tokio::join!(self.client.trending(), self.client.most_played());

        self.trending = trending.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to fetch trending songs");
            Vec::new()
        });
        self.most_played = most_played.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to fetch most played songs");
            Vec::new()
        });

        debug!(
            trending = self.trending.len(),
            most_played = self.most_played.len(),
            "Catalog refreshed"
        );
    }

    /// Run a search
    ///
    /// Blank queries are ignored and keep the previous results.
    pub async fn search(&mut self, query: &str) -> &[Song] {
        let query = query.trim();
        if query.is_empty() {
            return &self.search_results;
        }

        self.search_results = match self.client.search(query).await {
            Ok(songs) => songs,
            Err(e) => {
                warn!(query = %query, error = %e, "Search failed");
                Vec::new()
            }
        };
        self.last_query = Some(query.to_string());
        &self.search_results
    }

    pub fn trending(&self) -> &[Song] {
        &self.trending
    }

    pub fn most_played(&self) -> &[Song] {
        &self.most_played
    }

    pub fn search_results(&self) -> &[Song] {
        &self.search_results
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn select_playlist(&mut self, playlist: Playlist) {
        self.selected = playlist;
    }

    pub fn selected_playlist(&self) -> Playlist {
        self.selected
    }

    /// Songs of `playlist` in display order
    pub fn playlist(&self, playlist: Playlist) -> &[Song] {
        match playlist {
            Playlist::Trending => &self.trending,
            Playlist::MostPlayed => &self.most_played,
            Playlist::Favourites => &[],
        }
    }

    /// Queue to hand to the tracker when a song in `playlist` is selected
    pub fn queue(&self, playlist: Playlist) -> Vec<Song> {
        self.playlist(playlist).to_vec()
    }

    /// Find a song by id in any loaded list, with the list it came from
    pub fn find(&self, video_id: &str) -> Option<(&Song, &[Song])> {
        [
            self.trending.as_slice(),
            self.most_played.as_slice(),
            self.search_results.as_slice(),
        ]
        .into_iter()
        .find_map(|list| {
            list.iter()
                .find(|song| song.video_id == video_id)
                .map(|song| (song, list))
        })
    }
}

/// Newest entries of the local most-played list
pub fn recently_played(list: &MostPlayedList) -> Vec<Song> {
    list.recent(RECENTLY_PLAYED_LIMIT).into_iter().cloned().collect()
}
