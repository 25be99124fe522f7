use super::load::{default_config_path, resolve_config_path};
use super::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_stellina_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("STELLINA_CONFIG_PATH", "/tmp/stellina-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/stellina-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("stellina")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_falls_back_to_home_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_STATE_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".local/state")
            .join("stellina")
            .join("stellina.log")
    );
}

#[test]
fn defaults_match_the_widget() {
    let s = Settings::default();
    assert_eq!(s.audio.volume, 70);
    assert_eq!(s.audio.simulate_tick_ms, 1000);
    assert!(!s.playback.shuffle);
    assert_eq!(s.playback.repeat, RepeatSetting::Off);
    assert!(s.playlist.source.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_repeat_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
volume = 45
poll_ms = 100

[playback]
shuffle = true
repeat = "repeat-one"

[playlist]
source = "/srv/music/mix.toml"
recursive = false

[controls]
volume_step = 10

[ui]
header_text = "hello"

[log]
level = "debug"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("STELLINA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("STELLINA__AUDIO__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.volume, 45);
    assert_eq!(s.audio.poll_ms, 100);
    assert_eq!(s.audio.simulate_tick_ms, 1000);
    assert!(s.playback.shuffle);
    assert_eq!(s.playback.repeat, RepeatSetting::One);
    assert_eq!(
        s.playlist.source.as_deref(),
        Some(std::path::Path::new("/srv/music/mix.toml"))
    );
    assert!(!s.playlist.recursive);
    assert_eq!(s.controls.volume_step, 10);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.log.level, "debug");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
volume = 30
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("STELLINA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("STELLINA__AUDIO__VOLUME", "90");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.volume, 90);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.volume = 101;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.simulate_tick_ms = 0;
    assert!(s.validate().is_err());
}
