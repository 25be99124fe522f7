//! Audio output: the surface trait the player drives and its implementations.

mod output;
mod sink;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use output::{RodioSurface, SilentSurface};
pub use types::{AudioSurface, StartError, SurfaceEvent};

#[cfg(test)]
mod tests;
