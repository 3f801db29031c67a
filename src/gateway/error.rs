// Error types for Gateway module

use thiserror::Error;

use crate::runner::RunnerError;
use crate::search::SearchError;
use crate::storage::StorageError;

/// Gateway error types.
///
/// Component errors pass through transparently so no detail is lost
/// between a handler and the client.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid mode: '{0}' (expected run, write or search)")]
    InvalidMode(String),

    #[error("Malformed request: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl GatewayError {
    /// Stable machine-checkable error kind, used in response bodies and
    /// for status mapping
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidMode(_) => "invalid_mode",
            Self::Malformed(_) => "malformed_request",
            Self::Runner(RunnerError::UnsupportedLanguage(_)) => "unsupported_language",
            Self::Runner(RunnerError::Timeout(_)) => "timeout",
            Self::Runner(_) => "execution_error",
            Self::Storage(StorageError::AlreadyExists(_)) => "already_exists",
            Self::Storage(StorageError::InvalidPath(_) | StorageError::PathEscape(_)) => {
                "invalid_path"
            }
            Self::Storage(_) => "io_error",
            Self::Search(SearchError::InvalidScope(_)) => "invalid_scope",
            Self::Search(_) => "search_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
