// Error types for Storage module

use thiserror::Error;

/// Storage error types
///
/// Error messages carry the caller-supplied path, never the resolved
/// server-side path.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File already exists: '{0}'")]
    AlreadyExists(String),

    #[error("Invalid path: '{0}'")]
    InvalidPath(String),

    #[error("Path escapes output root: '{0}'")]
    PathEscape(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
