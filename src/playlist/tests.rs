use super::manifest::parse_manifest;
use super::*;
use crate::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn empty_playlist_is_rejected() {
    assert!(matches!(Playlist::new(Vec::new()), Err(Error::EmptyPlaylist)));
}

#[test]
fn builtin_playlist_has_three_tracks_with_messages() {
    let p = builtin_playlist();
    assert_eq!(p.len(), 3);
    assert_eq!(p.last_index(), 2);
    assert_eq!(p.tracks()[0].duration, "2:45");
    assert!(p.tracks().iter().all(|t| t.message.is_some()));
    assert!(p.tracks().get(3).is_none());
}

#[test]
fn manifest_resolves_relative_sources_against_its_directory() {
    let text = r#"
[[track]]
title = "One"
artist = "A"
duration = "1:00"
src = "one.mp3"
cover = "one.jpg"
message = "hi"

[[track]]
title = "Two"
artist = "B"
duration = "2:30"
src = "/abs/two.mp3"
"#;
    let p = parse_manifest(text, Path::new("/music/mix.toml")).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.tracks()[0].src, PathBuf::from("/music/one.mp3"));
    assert_eq!(p.tracks()[0].message.as_deref(), Some("hi"));
    assert_eq!(p.tracks()[1].src, PathBuf::from("/abs/two.mp3"));
    assert_eq!(p.tracks()[1].cover, "");
    assert!(p.tracks()[1].message.is_none());
}

#[test]
fn manifest_without_tracks_is_empty_playlist() {
    let err = parse_manifest("", Path::new("mix.toml")).unwrap_err();
    assert!(matches!(err, Error::EmptyPlaylist));
}

#[test]
fn manifest_with_bad_toml_reports_path() {
    let err = parse_manifest("[[track]\n", Path::new("broken.toml")).unwrap_err();
    match err {
        Error::Manifest { path, .. } => assert_eq!(path, PathBuf::from("broken.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_falls_back_to_builtin_when_source_is_missing_or_empty() {
    let settings = PlaylistSettings::default();
    assert_eq!(load(None, &settings).len(), 3);

    let dir = tempdir().unwrap();
    let p = load(Some(dir.path()), &settings);
    assert_eq!(p.tracks()[0].title, "sweetheart smpl (INTERLUDE)");

    let missing = dir.path().join("nope.toml");
    assert_eq!(load(Some(&missing), &settings).len(), 3);
}

#[test]
fn load_reads_manifest_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mix.toml");
    fs::write(
        &path,
        "[[track]]\ntitle = \"Solo\"\nartist = \"X\"\nduration = \"0:42\"\nsrc = \"solo.ogg\"\n",
    )
    .unwrap();

    let p = load(Some(&path), &PlaylistSettings::default());
    assert_eq!(p.len(), 1);
    assert_eq!(p.tracks()[0].src, dir.path().join("solo.ogg"));
}

#[test]
fn scan_filters_non_audio_hidden_and_sorts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
    fs::write(dir.path().join("cover.jpg"), b"jpeg").unwrap();

    let tracks = scan(dir.path(), &PlaylistSettings::default());
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "A");
    assert_eq!(tracks[1].title, "b");
    assert_eq!(tracks[0].artist, "Unknown artist");
    assert_eq!(tracks[0].duration, "0:00");
    assert!(tracks[0].cover.ends_with("cover.jpg"));
}

#[test]
fn scan_respects_recursive_false() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("child.mp3"), b"not real").unwrap();

    let settings = PlaylistSettings {
        recursive: false,
        ..PlaylistSettings::default()
    };
    let tracks = scan(dir.path(), &settings);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "root");
}
