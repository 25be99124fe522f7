//! The capability the player drives: anything that can play a track's source.

use std::path::PathBuf;

use thiserror::Error;

use crate::playlist::Track;

/// Notifications raised by an output while it plays.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Playback position advanced.
    TimeUpdate,
    /// The source's total duration became known.
    MetadataLoaded,
    /// The source played to its end.
    Ended,
}

/// Why an output refused to start playback.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("no audio output available")]
    NoOutput,
    #[error("no source loaded")]
    NoSource,
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// Audio rendering surface. Positions and durations are in seconds.
pub trait AudioSurface {
    /// Point the output at `track`'s source. Playback does not start.
    fn set_source(&mut self, track: &Track);
    /// Start or resume playback of the current source.
    fn start(&mut self) -> Result<(), StartError>;
    fn pause(&mut self);
    fn position(&self) -> f64;
    /// Move the playhead. Returns false when the output could not seek.
    fn set_position(&mut self, secs: f64) -> bool;
    /// Total duration, once the source's metadata is known.
    fn duration(&self) -> Option<f64>;
    /// Output gain in `0.0..=1.0`.
    fn set_gain(&mut self, gain: f32);
    /// Drain events raised since the last call.
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;
}

impl<S: AudioSurface + ?Sized> AudioSurface for Box<S> {
    fn set_source(&mut self, track: &Track) {
        (**self).set_source(track)
    }

    fn start(&mut self) -> Result<(), StartError> {
        (**self).start()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn position(&self) -> f64 {
        (**self).position()
    }

    fn set_position(&mut self, secs: f64) -> bool {
        (**self).set_position(secs)
    }

    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }

    fn set_gain(&mut self, gain: f32) {
        (**self).set_gain(gain)
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        (**self).poll_events()
    }
}
