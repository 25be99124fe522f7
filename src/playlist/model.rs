use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One playable item. Immutable once the playlist is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Display duration as `M:SS`.
    pub duration: String,
    pub src: PathBuf,
    #[serde(default)]
    pub cover: String,
    /// Display-only note shown when the cover is clicked.
    #[serde(default)]
    pub message: Option<String>,
}

/// Ordered, non-empty list of tracks. Insertion order is playback order.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub(super) tracks: Vec<Track>,
}

#[allow(clippy::len_without_is_empty)]
impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(Error::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn last_index(&self) -> usize {
        self.tracks.len() - 1
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
