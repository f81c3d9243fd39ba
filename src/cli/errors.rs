//! CLI-specific error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// A dump file could not be read or a report could not be written
    #[error("failed to access {path}: {source}")]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A dump file did not contain a JSON array of analyses
    #[error("invalid analyses dump {path}: {source}")]
    InvalidDump {
        /// The file involved
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The server failed to bind or run
    #[error("server error: {0}")]
    Server(#[from] io::Error),
}

impl CliError {
    /// File access failure
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Malformed dump file
    pub fn invalid_dump(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InvalidDump {
            path: path.into(),
            source,
        }
    }
}
