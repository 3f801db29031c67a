// Data types for Runner module

use serde::{Deserialize, Serialize};

use super::error::RunnerError;

/// Request to execute a code snippet
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    /// Language tag, matched against the fixed allow-list
    #[serde(default)]
    pub language: String,
    /// Snippet body, passed to the interpreter as one argument
    #[serde(default)]
    pub code: String,
    /// Text fed to the process standard input
    #[serde(default)]
    pub stdin: String,
    /// Wall-clock timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

pub(crate) fn default_timeout_ms() -> u64 {
    5000
}

/// Captured result of a finished snippet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Supported interpreters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    Shell,
    Batch,
}

impl Language {
    /// Parse a client-supplied language tag.
    ///
    /// `batch` maps to the Windows command interpreter and is rejected
    /// on other platforms rather than failing at spawn time.
    pub fn parse(tag: &str) -> Result<Self, RunnerError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "python" | "python3" | "py" => Ok(Self::Python),
            "shell" | "sh" | "bash" | "powershell" | "pwsh" => Ok(Self::Shell),
            #[cfg(windows)]
            "batch" | "cmd" | "bat" => Ok(Self::Batch),
            other => Err(RunnerError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// Canonical tag, used in logs and error messages
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Shell => "shell",
            Self::Batch => "batch",
        }
    }

    /// Fixed interpreter template: program plus the flag that takes the
    /// snippet as a single trailing argument.
    pub(crate) fn command_template(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Python if cfg!(windows) => ("python", &["-c"]),
            Self::Python => ("python3", &["-c"]),
            Self::Shell if cfg!(windows) => ("powershell", &["-NoProfile", "-Command"]),
            Self::Shell => ("sh", &["-c"]),
            // Not constructible through parse() off Windows; kept total
            // so a hand-built value still maps to a concrete template.
            Self::Batch => ("cmd", &["/C"]),
        }
    }
}
