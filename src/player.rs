//! Playback controller and the state it publishes.
//!
//! `Player` is UI-agnostic: the runtime feeds it input and output events,
//! the UI reads back `NowPlaying`.

mod controller;
mod state;
mod view;

pub use controller::Player;
pub use state::{PlaybackState, RepeatMode};
pub use view::{NowPlaying, TIME_PLACEHOLDER};
