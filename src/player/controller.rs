use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::audio::{AudioSurface, SurfaceEvent};
use crate::error::{Error, Result};
use crate::playlist::{Playlist, Track};
use crate::timefmt::{format_time, parse_display_duration};

use super::state::{PlaybackState, RepeatMode, SimulatedClock};
use super::view::{NowPlaying, TIME_PLACEHOLDER};

/// Playback controller: owns the playlist, the transport state and the output.
///
/// Every operation mutates state first and republishes the `NowPlaying`
/// view last, so readers never observe a half-applied transition.
pub struct Player<S> {
    playlist: Playlist,
    state: PlaybackState,
    surface: S,
    rng: StdRng,
    simulation: Option<SimulatedClock>,
    view: NowPlaying,
}

impl<S: AudioSurface> Player<S> {
    pub fn new(playlist: Playlist, surface: S) -> Self {
        Self::with_rng(playlist, surface, StdRng::from_os_rng())
    }

    /// Build a player with a caller-provided RNG (used for shuffle picks).
    pub fn with_rng(playlist: Playlist, surface: S, rng: StdRng) -> Self {
        let rows = playlist.len();
        let mut player = Self {
            playlist,
            state: PlaybackState::default(),
            surface,
            rng,
            simulation: None,
            view: NowPlaying::new(rows),
        };
        let volume = player.state.volume;
        player.set_volume(volume);
        player.load_at(0);
        player
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn view(&self) -> &NowPlaying {
        &self.view
    }

    pub fn current_track(&self) -> &Track {
        &self.playlist.tracks()[self.state.index]
    }

    /// True while progress is driven by the simulated clock.
    pub fn is_simulating(&self) -> bool {
        self.simulation.is_some()
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Make `index` the current track without starting it.
    pub fn load_track(&mut self, index: usize) -> Result<()> {
        let len = self.playlist.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        self.load_at(index);
        Ok(())
    }

    fn load_at(&mut self, index: usize) {
        debug_assert!(index < self.playlist.len());
        self.state.index = index;
        self.simulation = None;

        let track = &self.playlist.tracks()[index];
        self.surface.set_source(track);
        debug!(index, title = %track.title, "track loaded");

        self.view.title = track.title.clone();
        self.view.artist = track.artist.clone();
        self.view.cover = track.cover.clone();
        self.view.active = index;
        self.view.progress = 0.0;
        self.view.elapsed = format_time(0.0);
        self.view.total = TIME_PLACEHOLDER.to_string();
        self.publish_transport();
    }

    /// Load and start the track at `index` (a playlist row was chosen).
    pub fn play_song(&mut self, index: usize) -> Result<()> {
        self.load_track(index)?;
        self.play();
        Ok(())
    }

    fn play_at(&mut self, index: usize) {
        self.load_at(index);
        self.play();
    }

    /// Start the current track. If the output rejects it, progress is
    /// simulated from the track's display duration instead.
    pub fn play(&mut self) {
        match self.surface.start() {
            Ok(()) => {
                self.simulation = None;
                self.state.playing = true;
                info!(index = self.state.index, "playing");
            }
            Err(e) => {
                warn!(error = %e, index = self.state.index, "output rejected playback, simulating");
                self.state.playing = true;
                if self.simulation.is_none() {
                    self.start_simulation();
                }
            }
        }
        self.publish_transport();
    }

    fn start_simulation(&mut self) {
        let track = &self.playlist.tracks()[self.state.index];
        let total = parse_display_duration(&track.duration).unwrap_or_else(|| {
            warn!(duration = %track.duration, "unparseable display duration");
            0
        });
        self.simulation = Some(SimulatedClock { elapsed: 0, total });
        self.view.revealed[self.state.index] = true;
        self.publish_progress(0.0, total as f64);
    }

    pub fn pause(&mut self) {
        self.surface.pause();
        self.state.playing = false;
        info!(index = self.state.index, "paused");
        self.publish_transport();
    }

    pub fn toggle_play_pause(&mut self) {
        if self.state.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Step back in playlist order, wrapping to the last track. Shuffle is ignored.
    pub fn previous_song(&mut self) {
        let prev = match self.state.index {
            0 => self.playlist.last_index(),
            i => i - 1,
        };
        self.play_at(prev);
    }

    /// Advance: a uniform random pick when shuffling (the current track may
    /// come up again), otherwise the next track with wraparound.
    pub fn next_song(&mut self) {
        let next = if self.state.shuffle {
            self.rng.random_range(0..self.playlist.len())
        } else {
            (self.state.index + 1) % self.playlist.len()
        };
        self.play_at(next);
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.shuffle = !self.state.shuffle;
        info!(shuffle = self.state.shuffle, "shuffle toggled");
        self.publish_transport();
    }

    pub fn cycle_repeat(&mut self) {
        self.state.repeat = self.state.repeat.next();
        info!(repeat = ?self.state.repeat, "repeat mode changed");
        self.publish_transport();
    }

    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.state.repeat = repeat;
        self.publish_transport();
    }

    /// Jump to `offset / width` of the track. Does nothing until the
    /// output knows the duration.
    pub fn seek(&mut self, offset: f64, width: f64) {
        let Some(duration) = self.known_duration() else {
            debug!("seek ignored, duration unknown");
            return;
        };
        if !width.is_finite() || width <= 0.0 {
            return;
        }
        let position = (offset / width).clamp(0.0, 1.0) * duration;
        if !self.surface.set_position(position) {
            debug!(position, "seek rejected by output");
            return;
        }
        self.publish_progress(position, duration);
    }

    /// Set the volume in percent; values above 100 are clamped.
    pub fn set_volume(&mut self, percent: u8) {
        let percent = percent.min(100);
        self.state.volume = percent;
        self.surface.set_gain(f32::from(percent) / 100.0);
        self.view.volume = percent;
    }

    pub fn on_time_update(&mut self) {
        let Some(duration) = self.known_duration() else {
            return;
        };
        let position = self.surface.position();
        self.publish_progress(position, duration);
    }

    pub fn on_metadata_loaded(&mut self) {
        let Some(duration) = self.known_duration() else {
            return;
        };
        self.view.total = format_time(duration);
        self.view.revealed[self.state.index] = true;
    }

    /// End-of-track policy, shared by real and simulated playback.
    pub fn on_track_ended(&mut self) {
        let at_last = self.state.index == self.playlist.last_index();
        debug!(repeat = ?self.state.repeat, at_last, "track ended");
        match self.state.repeat {
            RepeatMode::One => {
                self.simulation = None;
                // A drained sink cannot seek; `play` then rebuilds it from the start.
                let _ = self.surface.set_position(0.0);
                self.play();
            }
            RepeatMode::All => self.next_song(),
            RepeatMode::Off if at_last => self.pause(),
            RepeatMode::Off => self.next_song(),
        }
    }

    /// Advance the simulated clock by one second.
    pub fn tick(&mut self) {
        if !self.state.playing {
            return;
        }
        let Some(clock) = self.simulation.as_mut() else {
            return;
        };
        clock.elapsed += 1;
        let SimulatedClock { elapsed, total } = *clock;
        self.publish_progress(elapsed as f64, total as f64);

        if elapsed >= total {
            self.simulation = None;
            self.on_track_ended();
        }
    }

    /// Everything the output reported since the last call, in order.
    pub fn take_surface_events(&mut self) -> Vec<SurfaceEvent> {
        self.surface.poll_events()
    }

    fn known_duration(&self) -> Option<f64> {
        self.surface
            .duration()
            .filter(|d| d.is_finite() && *d > 0.0)
    }

    fn publish_progress(&mut self, position: f64, duration: f64) {
        self.view.progress = if duration > 0.0 {
            (position / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.view.elapsed = format_time(position);
        self.view.total = format_time(duration);
    }

    fn publish_transport(&mut self) {
        self.view.playing = self.state.playing;
        self.view.simulated = self.simulation.is_some();
        self.view.shuffle = self.state.shuffle;
        self.view.repeat = self.state.repeat;
        self.view.volume = self.state.volume;
    }
}
