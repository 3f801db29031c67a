// Storage module - confined output file writing

pub mod config;
pub mod error;
pub mod types;
pub mod writer;

pub use config::StorageConfig;
pub use error::{Result, StorageError};
pub use types::{WriteOutcome, WriteRequest};
pub use writer::OutputWriter;
