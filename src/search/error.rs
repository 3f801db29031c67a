// Error types for Search module

use thiserror::Error;

/// Search error types
///
/// `FetchFailed` never escapes a search call; per-source fetch failures
/// degrade to partial results and are only reported through the typed
/// outcome.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid scope: '{0}' (expected manual, forum or all)")]
    InvalidScope(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
