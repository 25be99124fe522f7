use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::PlaylistSettings;
use crate::timefmt::format_duration;

use super::model::Track;

const COVER_NAMES: [&str; 4] = ["cover.jpg", "cover.png", "folder.jpg", "folder.png"];

fn is_audio_file(path: &Path, settings: &PlaylistSettings) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            settings
                .extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
                .any(|e| e == ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn cover_for(path: &Path) -> String {
    path.parent()
        .and_then(|dir| {
            COVER_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|p| p.is_file())
        })
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

/// Build tracks from the audio files below `dir`, sorted by artist and title.
pub fn scan(dir: &Path, settings: &PlaylistSettings) -> Vec<Track> {
    let mut walker = WalkDir::new(dir).follow_links(true);
    if !settings.recursive {
        walker = walker.max_depth(1);
    }

    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && is_audio_file(e.path(), settings))
        .map(|e| read_track(e.path()))
        .collect();

    tracks.sort_by(|a, b| {
        let ka = (a.artist.to_lowercase(), a.title.to_lowercase());
        let kb = (b.artist.to_lowercase(), b.title.to_lowercase());
        ka.cmp(&kb)
    });
    debug!(dir = %dir.display(), count = tracks.len(), "scanned playlist directory");
    tracks
}

fn read_track(path: &Path) -> Track {
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist = String::from("Unknown artist");
    let mut duration = String::from("0:00");

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            duration = format_duration(tagged.properties().duration());
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title().filter(|v| !v.trim().is_empty()) {
                    title = v.trim().to_string();
                }
                if let Some(v) = tag.artist().filter(|v| !v.trim().is_empty()) {
                    artist = v.trim().to_string();
                }
            }
        }
        Err(e) => debug!(path = %path.display(), error = %e, "no readable tags"),
    }

    Track {
        title,
        artist,
        duration,
        src: path.to_path_buf(),
        cover: cover_for(path),
        message: None,
    }
}
