use std::path::PathBuf;

use thiserror::Error;

use crate::layout::GridError;
use crate::logging::LoggingError;
use crate::storage::StorageError;

/// Unified result type for the grid editor crate.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors surfaced outside the pure grid computation.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("invalid config `{}`: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
