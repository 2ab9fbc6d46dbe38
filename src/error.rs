//! Error types for the scorecard renderer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving styles, rendering or writing scorecards
#[derive(Error, Debug)]
pub enum Error {
    /// A required match field was absent (dotted path, e.g. `score.runs`)
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Unknown tournament identifier
    #[error("Style configuration not found for tournament: {0}")]
    StyleNotFound(String),

    /// Unknown format for a multi-format tournament
    #[error("Invalid format '{format}' for tournament {tournament}")]
    InvalidFormat { tournament: String, format: String },

    /// Unknown render layout name
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    /// Invalid renderer configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Match data or config JSON could not be decoded
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Creating the output directory or writing the document failed
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Output {
            path: path.into(),
            source,
        }
    }
}
