//! Per-file failure type.

use thiserror::Error;

/// Why one file could not be rewritten. `Display` is the bare detail; the
/// caller owns the path and prints it alongside.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{0}")]
    Read(#[source] std::io::Error),

    #[error("{0}")]
    Decode(#[source] std::string::FromUtf8Error),

    #[error("{0}")]
    Write(#[source] std::io::Error),
}
