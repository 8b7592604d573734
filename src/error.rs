//! Error types for the player and carousel components
//!
//! Every failure is handled at the component boundary: synchronous rejections
//! leave state untouched, playback rejections are transient, and media errors
//! put the player into its degraded state.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Out-of-range numeric input (volume, seek fraction, interval)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Track or item index outside the list bounds
    #[error("Index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },

    /// The audio output refused to start playback
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    /// Unrecoverable decode or network failure reported by the audio output
    #[error("Media unavailable: {0}")]
    MediaUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Error::PlaybackRejected(message.into())
    }

    /// Rejections are reported to the user and then forgotten.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::PlaybackRejected(_))
    }
}
