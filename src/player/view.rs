//! The "now playing" snapshot the player publishes for the UI.

use super::state::RepeatMode;

/// Shown for times that are not known yet.
pub const TIME_PLACEHOLDER: &str = "--:--";

#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub playing: bool,
    pub simulated: bool,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub volume: u8,
    /// Fill of the progress bar, `0.0..=1.0`.
    pub progress: f64,
    pub elapsed: String,
    pub total: String,
    /// Highlighted playlist row.
    pub active: usize,
    /// Rows whose duration has been revealed by loading the track once.
    pub revealed: Vec<bool>,
}

impl NowPlaying {
    pub(super) fn new(rows: usize) -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            cover: String::new(),
            playing: false,
            simulated: false,
            shuffle: false,
            repeat: RepeatMode::Off,
            volume: 0,
            progress: 0.0,
            elapsed: "0:00".to_string(),
            total: TIME_PLACEHOLDER.to_string(),
            active: 0,
            revealed: vec![false; rows],
        }
    }
}
