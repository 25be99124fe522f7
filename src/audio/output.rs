use std::path::PathBuf;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info};

use crate::playlist::Track;
use crate::timefmt::parse_display_duration;

use super::sink::create_sink;
use super::types::{AudioSurface, StartError, SurfaceEvent};

/// A track's displayed `M:SS` duration, if it parses to something non-zero.
pub(super) fn listed_duration(track: &Track) -> Option<Duration> {
    parse_display_duration(&track.duration)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

/// Plays tracks on the default output device through `rodio`.
pub struct RodioSurface {
    stream: OutputStream,
    source: Option<PathBuf>,
    sink: Option<Sink>,
    duration: Option<Duration>,
    /// The track's listed duration, used when the decoder cannot tell.
    listed_duration: Option<Duration>,
    gain: f32,
    pending: Vec<SurfaceEvent>,
    ended_sent: bool,
}

impl RodioSurface {
    /// Open the default output device.
    pub fn open() -> Result<Self, rodio::StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which would land on the TUI.
        stream.log_on_drop(false);
        info!("audio output opened");
        Ok(Self {
            stream,
            source: None,
            sink: None,
            duration: None,
            listed_duration: None,
            gain: 1.0,
            pending: Vec::new(),
            ended_sent: false,
        })
    }
}

impl AudioSurface for RodioSurface {
    fn set_source(&mut self, track: &Track) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.source = Some(track.src.clone());
        self.duration = None;
        self.listed_duration = listed_duration(track);
        self.ended_sent = false;
    }

    fn start(&mut self) -> Result<(), StartError> {
        // Resume a paused sink that still has audio queued.
        if let Some(sink) = self.sink.as_ref().filter(|s| !s.empty()) {
            sink.play();
            return Ok(());
        }

        let path = self.source.clone().ok_or(StartError::NoSource)?;
        let (sink, total) = create_sink(&self.stream, &path)?;
        sink.set_volume(self.gain);
        sink.play();

        self.sink = Some(sink);
        self.duration = total.or(self.listed_duration);
        self.ended_sent = false;
        if self.duration.is_some() {
            self.pending.push(SurfaceEvent::MetadataLoaded);
        }
        debug!(path = %path.display(), decoded = ?total, duration = ?self.duration, "sink started");
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn position(&self) -> f64 {
        self.sink
            .as_ref()
            .map(|s| s.get_pos().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn set_position(&mut self, secs: f64) -> bool {
        let Some(sink) = &self.sink else {
            return false;
        };
        match sink.try_seek(Duration::from_secs_f64(secs.max(0.0))) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "seek rejected");
                false
            }
        }
    }

    fn duration(&self) -> Option<f64> {
        self.duration.map(|d| d.as_secs_f64())
    }

    fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
        if let Some(sink) = &self.sink {
            sink.set_volume(gain);
        }
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        let mut events = std::mem::take(&mut self.pending);
        if let Some(sink) = &self.sink {
            if sink.empty() {
                if !self.ended_sent {
                    self.ended_sent = true;
                    events.push(SurfaceEvent::Ended);
                }
            } else if !sink.is_paused() {
                events.push(SurfaceEvent::TimeUpdate);
            }
        }
        events
    }
}

/// Output used when no device could be opened: every start is rejected,
/// which keeps the player on its simulated clock.
#[derive(Debug, Default)]
pub struct SilentSurface;

impl AudioSurface for SilentSurface {
    fn set_source(&mut self, _track: &Track) {}

    fn start(&mut self) -> Result<(), StartError> {
        Err(StartError::NoOutput)
    }

    fn pause(&mut self) {}

    fn position(&self) -> f64 {
        0.0
    }

    fn set_position(&mut self, _secs: f64) -> bool {
        false
    }

    fn duration(&self) -> Option<f64> {
        None
    }

    fn set_gain(&mut self, _gain: f32) {}

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        Vec::new()
    }
}
