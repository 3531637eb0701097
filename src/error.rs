//! Error types for the resolution core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the resolution core and its loaders.
#[derive(Debug, Error)]
pub enum Error {
    /// A key outside `'0'..='9'` reached the generator.
    #[error("invalid key {0:?}: only digits 0-9 can be resolved")]
    InvalidKey(char),

    /// A required data file does not exist.
    #[error("data file not found: {}", .0.display())]
    MissingData(PathBuf),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for the resolution core.
pub type Result<T> = std::result::Result<T, Error>;
