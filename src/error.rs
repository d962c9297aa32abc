//! Error types for treepick
//!
//! The selection core is total and never fails; these errors belong to the
//! layers around it (providers, the selection store, configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treepick operations
pub type TreepickResult<T> = Result<T, TreepickError>;

/// Main error type for treepick operations
#[derive(Error, Debug)]
pub enum TreepickError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration file could not be understood
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Tree or selection document with an extension we cannot read
    #[error("unsupported document format: {path} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// Directory provider root is missing or not a directory
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Directory walk failed
    #[error("failed to walk directory: {message}")]
    Walk { message: String },

    /// Selection document written by a newer treepick
    #[error("unsupported selection document version {version} in {path}")]
    UnsupportedVersion { path: PathBuf, version: u32 },

    /// Interactive selection was abandoned by the user
    #[error("selection aborted by user")]
    Aborted,
}

impl From<ignore::Error> for TreepickError {
    fn from(err: ignore::Error) -> Self {
        TreepickError::Walk {
            message: err.to_string(),
        }
    }
}
