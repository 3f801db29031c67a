// Runner module - sandboxed snippet execution

pub mod config;
pub mod error;
pub mod process;
pub mod types;

pub use config::RunnerConfig;
pub use error::{Result, RunnerError};
pub use process::SandboxRunner;
pub use types::{Language, RunOutcome, RunRequest};
