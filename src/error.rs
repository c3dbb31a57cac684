use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for truncation operations.
pub type TruncateResult<T> = Result<T, TruncateError>;

/// Error type returned by truncation functions.
///
/// Every variant is an I/O failure; there is no local recovery and no partial-success reporting.
#[derive(Debug, Error)]
pub enum TruncateError {
    /// The source could not be opened or read (missing file, permissions, invalid UTF-8).
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination could not be created, written or flushed.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying I/O error on a reader/writer that is not tied to a path.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TruncateError {
    /// The underlying [`std::io::Error`].
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source,
            Self::Io(e) => e,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
