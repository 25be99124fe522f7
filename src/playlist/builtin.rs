use std::path::PathBuf;

use super::model::{Playlist, Track};

/// The playlist shipped with the player, used when no source is configured.
pub fn builtin_playlist() -> Playlist {
    let track = |title: &str, duration: &str, src: &str, message: &str| Track {
        title: title.to_string(),
        artist: "ANIMA 14".to_string(),
        duration: duration.to_string(),
        src: PathBuf::from(src),
        cover: "meche.jpg".to_string(),
        message: Some(message.to_string()),
    };

    let tracks = vec![
        track(
            "sweetheart smpl (INTERLUDE)",
            "2:45",
            "song1.mp3",
            "Para mi princesa hermosa que ilumina mis días ✨",
        ),
        track(
            "Esta pq t amo",
            "3:28",
            "song2.mp3",
            "Mercedes, eres mi mundo entero 💖",
        ),
        track(
            "type beat love for you, meche, my love, my star",
            "4:15",
            "song3.mp3",
            "Mi estrella brillante, mi amor eterno 🌟💕",
        ),
    ];

    Playlist { tracks }
}
