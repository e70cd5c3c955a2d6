//! Error types for `todofile`.

use std::path::PathBuf;

/// Errors that can occur when reading or writing the todo store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store was constructed with an empty directory or file name.
    #[error("storage directory or file name is not set")]
    Configuration,

    /// The store file exists but does not contain valid JSON.
    #[error("corrupt store file {path}: {source}")]
    CorruptData {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
