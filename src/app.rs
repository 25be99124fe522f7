//! Application model: the player plus everything the UI shows around it.

use crate::audio::AudioSurface;
use crate::keepsake::Keepsake;
use crate::player::Player;

pub struct App<S> {
    pub player: Player<S>,
    pub keepsake: Keepsake,
    /// Volume change in percent for the volume up/down events.
    pub volume_step: u8,
    pub quit: bool,
}

impl<S: AudioSurface> App<S> {
    pub fn new(player: Player<S>, volume_step: u8) -> Self {
        Self {
            player,
            keepsake: Keepsake::default(),
            volume_step,
            quit: false,
        }
    }
}
