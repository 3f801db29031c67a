//! toolgate: HTTP action gateway
//!
//! A single-endpoint gateway that dispatches tagged action requests to
//! one of three handlers:
//!
//! - **runner**: executes short code snippets in a subprocess with a
//!   hard wall-clock timeout
//! - **storage**: writes text files confined beneath a fixed output root
//! - **search**: best-effort keyword search over remote sitemaps
//! - **gateway**: the dispatch core and HTTP surface tying them together
//!
//! # Example
//!
//! ```ignore
//! use toolgate::{Gateway, OutputWriter, RunnerConfig, SandboxRunner,
//!                SearchClient, SearchConfig, StorageConfig};
//!
//! let runner = SandboxRunner::new(RunnerConfig::default());
//! let writer = OutputWriter::new(StorageConfig::default())?;
//! let search = SearchClient::new(SearchConfig::default());
//! let gateway = Gateway::new(runner, writer, search);
//!
//! let outcome = gateway.run(req).await?;
//! println!("exit code: {}", outcome.exit_code);
//! ```

pub mod gateway;
pub mod runner;
pub mod search;
pub mod storage;

pub use gateway::{ActionOutcome, ActionRequest, ErrorBody, Gateway, GatewayError};
pub use runner::{Language, RunOutcome, RunRequest, RunnerConfig, RunnerError, SandboxRunner};
pub use search::{
    HttpSitemapFetcher, Scope, SearchClient, SearchConfig, SearchError, SearchHit, SearchOutcome,
    SearchRequest, SitemapFetcher, SitemapSource,
};
pub use storage::{OutputWriter, StorageConfig, StorageError, WriteOutcome, WriteRequest};
