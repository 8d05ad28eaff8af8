/// Song domain type
use serde::{Deserialize, Deserializer, Serialize};

/// A playable music item as reported by the remote music service
///
/// Songs are created from service responses and never mutated afterwards,
/// except for attaching a resolved `audio_url` (see [`Song::with_audio_url`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// External identifier, primary key for dedup and lookup
    pub video_id: String,

    /// Song title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Thumbnail image URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,

    /// Length in seconds as reported by the service
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: f64,

    /// Server-reported play count (informational only)
    #[serde(default, deserialize_with = "null_as_default")]
    pub play_count: u64,

    /// Playable URL, absent until resolved
    #[serde(default, deserialize_with = "empty_as_none")]
    pub audio_url: Option<String>,
}

impl Song {
    /// Create a song with no thumbnail, play count, or audio URL
    pub fn new(video_id: impl Into<String>, title: impl Into<String>, duration: f64) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            thumbnail: String::new(),
            duration,
            play_count: 0,
            audio_url: None,
        }
    }

    /// Return a copy of this song with a resolved audio URL attached
    #[must_use]
    pub fn with_audio_url(&self, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            audio_url: (!url.is_empty()).then_some(url),
            ..self.clone()
        }
    }

    /// Whether a non-empty audio URL is attached
    pub fn has_audio_url(&self) -> bool {
        self.audio_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let url = Option::<String>::deserialize(deserializer)?;
    Ok(url.filter(|u| !u.trim().is_empty()))
}
