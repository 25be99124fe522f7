//! Scriptable output used by the player and dispatch tests.

use std::path::PathBuf;

use crate::playlist::Track;

use super::types::{AudioSurface, StartError, SurfaceEvent};

#[derive(Debug, Default)]
pub struct FakeSurface {
    pub reject_start: bool,
    pub reject_seek: bool,
    pub source: Option<PathBuf>,
    pub started: usize,
    pub paused: usize,
    pub position: f64,
    pub duration: Option<f64>,
    pub gain: f32,
    pub events: Vec<SurfaceEvent>,
}

impl FakeSurface {
    pub fn rejecting() -> Self {
        Self {
            reject_start: true,
            ..Self::default()
        }
    }
}

impl AudioSurface for FakeSurface {
    fn set_source(&mut self, track: &Track) {
        self.source = Some(track.src.clone());
        self.position = 0.0;
        self.duration = None;
    }

    fn start(&mut self) -> Result<(), StartError> {
        if self.reject_start {
            return Err(StartError::NoOutput);
        }
        self.started += 1;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused += 1;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, secs: f64) -> bool {
        if self.reject_seek {
            return false;
        }
        self.position = secs;
        true
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}
