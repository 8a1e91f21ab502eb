//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Only configuration and frame-size problems are errors here: an unavailable session,
//! an empty hit-test and a stale reading are ordinary tick outcomes reported through
//! [`crate::sampler::TickStatus`] and [`crate::probe::probe_point`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The engine reported a frame the grid cannot be planned on.
    #[error("invalid frame dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: &'static str,
    },
}

impl Error {
    /// Whether the error comes from the engine's frame rather than the configuration.
    pub fn is_frame_related(&self) -> bool {
        matches!(self, Error::InvalidDimensions { .. })
    }
}
