// Sitemap document fetching

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::error::{Result, SearchError};

/// User-Agent header sent with sitemap requests
const USER_AGENT: &str = concat!("toolgate/", env!("CARGO_PKG_VERSION"));

/// Document source for sitemap retrieval.
///
/// The search client only depends on this seam, so tests can substitute
/// canned documents and injected failures.
#[async_trait]
pub trait SitemapFetcher: Send + Sync {
    /// Fetch one sitemap document as text
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher with a bounded request timeout
pub struct HttpSitemapFetcher {
    client: reqwest::Client,
}

impl HttpSitemapFetcher {
    pub fn new(timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

#[async_trait]
impl SitemapFetcher for HttpSitemapFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "fetching sitemap");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::FetchFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::FetchFailed(e.to_string()))
    }
}
