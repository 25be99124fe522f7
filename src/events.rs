//! Handlers keyed by logical event name.
//!
//! Input adapters (keys, mouse, the audio output) translate what happened
//! into one of the names below; the table maps the name onto `App`.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, warn};

use crate::app::App;
use crate::audio::{AudioSurface, SurfaceEvent};

pub mod names {
    pub const PLAY_PAUSE: &str = "transport.play_pause";
    pub const PLAY: &str = "transport.play";
    pub const PAUSE: &str = "transport.pause";
    pub const PREVIOUS: &str = "transport.previous";
    pub const NEXT: &str = "transport.next";
    pub const SHUFFLE: &str = "transport.shuffle";
    pub const REPEAT: &str = "transport.repeat";
    pub const SEEK: &str = "progress.seek";
    pub const VOLUME_SET: &str = "volume.set";
    pub const VOLUME_UP: &str = "volume.up";
    pub const VOLUME_DOWN: &str = "volume.down";
    pub const SELECT: &str = "playlist.select";
    pub const TIME_UPDATE: &str = "audio.time_update";
    pub const METADATA_LOADED: &str = "audio.metadata_loaded";
    pub const ENDED: &str = "audio.ended";
    pub const HEART: &str = "keepsake.heart";
    pub const MESSAGE: &str = "keepsake.message";
    pub const CARD: &str = "keepsake.card";
    pub const RESPOND: &str = "keepsake.respond";
    pub const QUIT: &str = "app.quit";
}

/// The event name an output notification is dispatched under.
pub fn surface_event_name(event: SurfaceEvent) -> &'static str {
    match event {
        SurfaceEvent::TimeUpdate => names::TIME_UPDATE,
        SurfaceEvent::MetadataLoaded => names::METADATA_LOADED,
        SurfaceEvent::Ended => names::ENDED,
    }
}

/// Payload carried with an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventArgs {
    None,
    /// Click `offset` along a control `width` wide.
    Seek { offset: f64, width: f64 },
    Volume(u8),
    Select(usize),
}

pub type Handler<S> = fn(&mut App<S>, &EventArgs, Instant);

pub struct HandlerTable<S> {
    handlers: HashMap<&'static str, Handler<S>>,
}

impl<S: AudioSurface> HandlerTable<S> {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &'static str, handler: Handler<S>) {
        self.handlers.insert(name, handler);
    }

    /// Run the handler for `name`. Returns false when nothing is registered.
    pub fn dispatch(&self, name: &str, app: &mut App<S>, args: &EventArgs, now: Instant) -> bool {
        match self.handlers.get(name) {
            Some(handler) => {
                handler(app, args, now);
                true
            }
            None => {
                debug!(name, "no handler registered");
                false
            }
        }
    }

    /// Dispatch everything the audio output reported since the last call.
    pub fn pump_surface(&self, app: &mut App<S>, now: Instant) {
        for event in app.player.take_surface_events() {
            self.dispatch(surface_event_name(event), app, &EventArgs::None, now);
        }
    }
}

impl<S: AudioSurface> Default for HandlerTable<S> {
    /// The standard bindings for every event in `names`.
    fn default() -> Self {
        let mut t = Self::empty();

        t.register(names::PLAY_PAUSE, |app, _, _| app.player.toggle_play_pause());
        t.register(names::PLAY, |app, _, _| app.player.play());
        t.register(names::PAUSE, |app, _, _| app.player.pause());
        t.register(names::PREVIOUS, |app, _, _| app.player.previous_song());
        t.register(names::NEXT, |app, _, _| app.player.next_song());
        t.register(names::SHUFFLE, |app, _, _| app.player.toggle_shuffle());
        t.register(names::REPEAT, |app, _, _| app.player.cycle_repeat());
        t.register(names::SEEK, |app, args, _| {
            if let EventArgs::Seek { offset, width } = *args {
                app.player.seek(offset, width);
            }
        });
        t.register(names::VOLUME_SET, |app, args, _| {
            if let EventArgs::Volume(percent) = *args {
                app.player.set_volume(percent);
            }
        });
        t.register(names::VOLUME_UP, |app, _, _| {
            let v = app.player.state().volume.saturating_add(app.volume_step);
            app.player.set_volume(v);
        });
        t.register(names::VOLUME_DOWN, |app, _, _| {
            let v = app.player.state().volume.saturating_sub(app.volume_step);
            app.player.set_volume(v);
        });
        t.register(names::SELECT, |app, args, _| {
            if let EventArgs::Select(index) = *args {
                if let Err(e) = app.player.play_song(index) {
                    warn!(error = %e, "playlist selection ignored");
                }
            }
        });
        t.register(names::TIME_UPDATE, |app, _, _| app.player.on_time_update());
        t.register(names::METADATA_LOADED, |app, _, _| app.player.on_metadata_loaded());
        t.register(names::ENDED, |app, _, _| app.player.on_track_ended());
        t.register(names::HEART, |app, _, now| app.keepsake.click_heart(now));
        t.register(names::MESSAGE, |app, _, now| {
            let message = app.player.current_track().message.as_deref();
            app.keepsake.show_message(message, now);
        });
        t.register(names::CARD, |app, _, now| app.keepsake.toggle_card(now));
        t.register(names::RESPOND, |app, _, now| app.keepsake.respond(now));
        t.register(names::QUIT, |app, _, _| app.quit = true);

        t
    }
}
