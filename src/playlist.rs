//! Playlist model and the places a playlist can come from.
//!
//! A configured source is either a TOML manifest or a directory of audio
//! files; without one (or when it yields nothing) the built-in list is used.

mod builtin;
mod manifest;
mod model;
mod scan;

use std::path::Path;

use tracing::{info, warn};

use crate::config::PlaylistSettings;

pub use builtin::builtin_playlist;
pub use manifest::load_manifest;
pub use model::{Playlist, Track};
pub use scan::scan;

/// Resolve the playlist for `source`, falling back to the built-in one.
pub fn load(source: Option<&Path>, settings: &PlaylistSettings) -> Playlist {
    let Some(source) = source else {
        return builtin_playlist();
    };

    let loaded = if source.is_dir() {
        Playlist::new(scan(source, settings))
    } else {
        load_manifest(source)
    };

    match loaded {
        Ok(playlist) => {
            info!(source = %source.display(), tracks = playlist.len(), "playlist loaded");
            playlist
        }
        Err(e) => {
            warn!(source = %source.display(), error = %e, "using built-in playlist");
            builtin_playlist()
        }
    }
}

#[cfg(test)]
mod tests;
