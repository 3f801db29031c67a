// Data types for Search module

use serde::{Deserialize, Serialize};

use super::error::SearchError;

/// Which sitemap sources a search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Manual,
    Forum,
    All,
}

impl Scope {
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "forum" => Ok(Self::Forum),
            "all" => Ok(Self::All),
            other => Err(SearchError::InvalidScope(other.to_string())),
        }
    }
}

/// Request for a keyword search over the configured sitemaps
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Substring matched case-insensitively against sitemap URLs
    #[serde(default)]
    pub query: String,
    /// Source scope: manual, forum or all
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Result cap across all sources combined
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

pub(crate) fn default_scope() -> String {
    "manual".to_string()
}

pub(crate) fn default_max_results() -> usize {
    5
}

/// One matching sitemap entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Search result, possibly partial.
///
/// `skipped_sources` names the sources whose fetch failed; it is kept
/// off the wire but lets callers and tests observe degradation.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<SearchHit>,
    #[serde(skip_serializing)]
    pub skipped_sources: Vec<String>,
}
