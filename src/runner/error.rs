// Error types for Runner module

use thiserror::Error;

/// Runner error types
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Execution timed out after {0} ms")]
    Timeout(u64),

    #[error("Failed to spawn interpreter '{0}': {1}")]
    SpawnFailed(&'static str, String),

    #[error("Failed to capture process output: {0}")]
    OutputCaptureFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
