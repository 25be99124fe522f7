use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{self, LogSettings};

/// Where log lines go: the configured file, else the XDG state directory.
pub fn log_path(log: &LogSettings) -> Option<PathBuf> {
    log.file.clone().or_else(config::default_log_path)
}

/// Install the global subscriber. The terminal belongs to the UI, so output
/// is appended to a file. Returns the file in use, or `None` when no
/// location could be resolved.
pub fn init_logging(log: &LogSettings) -> io::Result<Option<PathBuf>> {
    let Some(path) = log_path(log) else {
        return Ok(None);
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(Some(path))
}
