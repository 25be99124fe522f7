//! Utilities for creating `rodio` sinks from track sources.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink`, reporting failures instead of panicking so the player can
//! fall back to its simulated clock.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::StartError;

/// Create a paused `Sink` for the file at `path`, with its decoded duration if known.
pub(super) fn create_sink(
    stream: &OutputStream,
    path: &Path,
) -> Result<(Sink, Option<Duration>), StartError> {
    let file = File::open(path).map_err(|source| StartError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    // Built from the `File` itself so the decoder knows the byte length and can seek.
    let source = Decoder::try_from(file).map_err(|e| StartError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let total = source.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok((sink, total))
}
