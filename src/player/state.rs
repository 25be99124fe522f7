use crate::config::RepeatSetting;

/// What happens when a track finishes on its own.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Advance until the last track, then stop.
    #[default]
    Off,
    /// Advance and wrap around to the first track.
    All,
    /// Replay the current track.
    One,
}

impl RepeatMode {
    /// The next mode in the `Off -> All -> One -> Off` cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

impl From<RepeatSetting> for RepeatMode {
    fn from(setting: RepeatSetting) -> Self {
        match setting {
            RepeatSetting::Off => Self::Off,
            RepeatSetting::All => Self::All,
            RepeatSetting::One => Self::One,
        }
    }
}

/// Mutable transport state for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackState {
    /// Always a valid index into the playlist.
    pub index: usize,
    pub playing: bool,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    /// Volume in percent (0-100); the output gain is `volume / 100`.
    pub volume: u8,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            index: 0,
            playing: false,
            shuffle: false,
            repeat: RepeatMode::Off,
            volume: 70,
        }
    }
}

/// Stand-in clock used when the output refuses to play.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct SimulatedClock {
    pub elapsed: u64,
    pub total: u64,
}
