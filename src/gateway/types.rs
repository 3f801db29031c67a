// Data types for Gateway module

use serde::Serialize;
use serde_json::Value;

use super::error::{GatewayError, Result};
use crate::runner::{RunOutcome, RunRequest};
use crate::search::{SearchOutcome, SearchRequest};
use crate::storage::{WriteOutcome, WriteRequest};

/// Tagged action union, decoded by its `mode` discriminator
#[derive(Debug, Clone)]
pub enum ActionRequest {
    Run(RunRequest),
    Write(WriteRequest),
    Search(SearchRequest),
}

impl ActionRequest {
    /// Decode an action from a JSON object.
    ///
    /// Fields irrelevant to the selected mode are ignored; fields the
    /// mode needs but the caller omitted take their documented defaults.
    pub fn from_value(value: Value) -> Result<Self> {
        let mode = value
            .get("mode")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match mode.as_str() {
            "run" => Ok(Self::Run(serde_json::from_value(value)?)),
            "write" => Ok(Self::Write(serde_json::from_value(value)?)),
            "search" => Ok(Self::Search(serde_json::from_value(value)?)),
            _ => Err(GatewayError::InvalidMode(mode)),
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::Run(_) => "run",
            Self::Write(_) => "write",
            Self::Search(_) => "search",
        }
    }
}

/// Result of the selected handler.
///
/// Untagged, so `/action` responses serialize byte-identically to the
/// direct endpoint for the same request.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ActionOutcome {
    Run(RunOutcome),
    Write(WriteOutcome),
    Search(SearchOutcome),
}

/// Uniform error body: a stable kind slug plus a short human-readable
/// detail string
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub detail: String,
}

impl ErrorBody {
    pub fn from_error(err: &GatewayError) -> Self {
        Self {
            error: err.kind(),
            detail: err.to_string(),
        }
    }
}
