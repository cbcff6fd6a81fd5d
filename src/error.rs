//! Error types for metering sessions.

use std::io;
use thiserror::Error;

/// Errors raised by a [`Session`](crate::Session).
///
/// Degenerate numeric input (an unknown or zero total, zero elapsed time, a
/// count that overshoots the total) is never an error; it only changes how
/// the line is rendered.
#[derive(Debug, Error)]
pub enum Error {
    /// `tick` or `finish` was called before `start`.
    #[error("metering session has not been started")]
    NotStarted,

    /// `start` was called on a session that is already running or finished.
    #[error("metering session was already started")]
    AlreadyStarted,

    /// `tick` or `finish` was called after the session finished.
    #[error("metering session has already finished")]
    Finished,

    /// The output stream rejected a write or flush.
    #[error("failed to write progress line: {0}")]
    Io(#[from] io::Error),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
