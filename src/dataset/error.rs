//! Error types for dataset operations.

use std::path::PathBuf;

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error type for dataset operations.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// No dataset file exists for the requested state.
    #[error("no dataset file for state '{0}'")]
    StateNotFound(String),

    /// Filesystem error while reading the dataset directory or a state file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A state file could not be parsed as CSV.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
