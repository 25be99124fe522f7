use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

use super::model::{Playlist, Track};

/// On-disk playlist: a list of `[[track]]` tables.
#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "track")]
    tracks: Vec<Track>,
}

/// Read a TOML playlist manifest. Relative `src` paths are resolved against
/// the manifest's directory; covers are kept as written.
pub fn load_manifest(path: &Path) -> Result<Playlist> {
    let text = fs::read_to_string(path)?;
    parse_manifest(&text, path)
}

pub(super) fn parse_manifest(text: &str, path: &Path) -> Result<Playlist> {
    let manifest: Manifest = toml::from_str(text).map_err(|source| Error::Manifest {
        path: path.to_path_buf(),
        source,
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let tracks = manifest
        .tracks
        .into_iter()
        .map(|mut t| {
            if t.src.is_relative() {
                t.src = base.join(&t.src);
            }
            t
        })
        .collect();

    Playlist::new(tracks)
}
