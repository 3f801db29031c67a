// Data types for Storage module

use serde::{Deserialize, Serialize};

/// Request to write a text file under the output root
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteRequest {
    /// Relative path, untrusted; confined beneath the output root
    #[serde(default)]
    pub path: String,
    /// File content, written as UTF-8 with LF line endings
    #[serde(default)]
    pub content: String,
    /// When false, an existing file fails the request untouched
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

pub(crate) fn default_overwrite() -> bool {
    true
}

/// Result of a completed write
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOutcome {
    /// Absolute resolved path on the server
    pub path: String,
    /// Exact number of bytes written
    pub bytes_written: u64,
    /// SHA-256 hex digest of the bytes written
    pub sha256: String,
}
