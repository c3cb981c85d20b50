// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CounterError {
    /// A read other than end-of-stream failed. `counted` is the partial
    /// count the strategy chose to report.
    #[error("{algorithm}: read failed after {counted} lines: {source}")]
    Read {
        algorithm: &'static str,
        counted: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("{algorithm}: line exceeds {limit} bytes after {counted} lines")]
    LineTooLong {
        algorithm: &'static str,
        limit: usize,
        counted: usize,
    },

    #[error("Failed to seek to start of stream: {source}")]
    Seek {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type CountResult<T> = std::result::Result<T, CounterError>;

impl CounterError {
    /// Partial count carried by a failed scan.
    pub fn partial_count(&self) -> Option<usize> {
        match self {
            Self::Read { counted, .. } | Self::LineTooLong { counted, .. } => Some(*counted),
            _ => None,
        }
    }
}
