use crate::audio::AudioSurface;
use crate::config;
use crate::player::Player;

/// Apply the configured shuffle, repeat mode and volume to a fresh player.
pub fn apply_playback_defaults<S: AudioSurface>(player: &mut Player<S>, settings: &config::Settings) {
    if settings.playback.shuffle != player.state().shuffle {
        player.toggle_shuffle();
    }
    player.set_repeat(settings.playback.repeat.into());
    player.set_volume(settings.audio.volume);
}
