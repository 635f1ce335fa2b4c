//! Error types for termfolio.
//!
//! Command-level mistakes (unknown commands, missing sections) are never
//! errors at this level: the views absorb them and report them inline as
//! history entries. This type covers the host: terminal I/O, bad buffer
//! sizes, an unknown view name and URL launch failures.

use std::fmt;
use std::io;

/// Result type alias for termfolio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termfolio operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal operations.
    Io(io::Error),
    /// Buffer dimension error (e.g., zero width/height).
    InvalidDimensions { width: u32, height: u32 },
    /// A view name that is neither `showcase` nor `resume`.
    UnknownView(String),
    /// The platform opener could not be launched for a URL.
    Launch { url: String, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid dimensions: {width}x{height}")
            }
            Self::UnknownView(name) => {
                write!(f, "unknown view: {name} (expected showcase or resume)")
            }
            Self::Launch { url, source } => write!(f, "failed to open {url}: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Launch { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
