// Search module - keyword lookup over remote sitemaps

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod types;

pub use client::SearchClient;
pub use config::{SearchConfig, SitemapSource};
pub use error::{Result, SearchError};
pub use fetch::{HttpSitemapFetcher, SitemapFetcher};
pub use types::{Scope, SearchHit, SearchOutcome, SearchRequest};
