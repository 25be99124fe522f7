//! Crate-wide error types.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A track index outside the playlist was requested.
    #[error("track index {index} out of range for playlist of {len}")]
    OutOfRange { index: usize, len: usize },

    /// A playlist must hold at least one track.
    #[error("playlist is empty")]
    EmptyPlaylist,

    /// A playlist manifest could not be parsed.
    #[error("invalid playlist manifest {path:?}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
