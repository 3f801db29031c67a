// Sitemap search client

use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, info, warn};

use super::config::{SearchConfig, SitemapSource};
use super::error::Result;
use super::fetch::{HttpSitemapFetcher, SitemapFetcher};
use super::types::{Scope, SearchHit, SearchOutcome, SearchRequest};

/// Best-effort keyword search over the configured sitemap sources
pub struct SearchClient {
    config: SearchConfig,
    fetcher: Arc<dyn SitemapFetcher>,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Self {
        let fetcher = Arc::new(HttpSitemapFetcher::new(config.fetch_timeout_secs));
        Self::with_fetcher(config, fetcher)
    }

    /// Construct with an injected document source
    pub fn with_fetcher(config: SearchConfig, fetcher: Arc<dyn SitemapFetcher>) -> Self {
        debug!(
            manual = %config.manual.url,
            forum = %config.forum.url,
            fetch_timeout_secs = config.fetch_timeout_secs,
            "initializing search client"
        );
        Self { config, fetcher }
    }

    /// Ordered source list for a scope; manual precedes forum for `all`
    fn sources_for(&self, scope: Scope) -> Vec<&SitemapSource> {
        match scope {
            Scope::Manual => vec![&self.config.manual],
            Scope::Forum => vec![&self.config.forum],
            Scope::All => vec![&self.config.manual, &self.config.forum],
        }
    }

    /// Search sitemap URLs for a case-insensitive substring match.
    ///
    /// A source whose fetch fails is skipped and reported in the
    /// outcome; partial results beat a hard failure here.
    pub async fn search(&self, req: SearchRequest) -> Result<SearchOutcome> {
        let scope = Scope::parse(&req.scope)?;
        let max_results = req.max_results.max(1);
        let needle = req.query.to_lowercase();

        debug!(scope = ?scope, max_results, query = %req.query, "starting sitemap search");

        let mut results = Vec::new();
        let mut skipped_sources = Vec::new();

        'sources: for source in self.sources_for(scope) {
            let body = match self.fetcher.fetch(&source.url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(source = %source.name, error = %e, "sitemap fetch failed, skipping source");
                    skipped_sources.push(source.name.clone());
                    continue;
                }
            };

            for url in parse_locations(&body) {
                if url.to_lowercase().contains(&needle) {
                    results.push(SearchHit {
                        title: title_from_url(&url),
                        snippet: format!("Documentation entry matching \"{}\".", req.query),
                        url,
                    });
                    if results.len() >= max_results {
                        break 'sources;
                    }
                }
            }
        }

        info!(
            hits = results.len(),
            skipped = skipped_sources.len(),
            "sitemap search finished"
        );

        Ok(SearchOutcome {
            results,
            skipped_sources,
        })
    }
}

/// Extract `<loc>` entries from a sitemap document in order.
///
/// Parse errors end the scan of that document; whatever was extracted
/// before the error still counts.
fn parse_locations(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locations = Vec::new();
    let mut in_loc = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"loc" => in_loc = true,
            Ok(Event::End(e)) if e.local_name().as_ref() == b"loc" => in_loc = false,
            Ok(Event::Text(t)) if in_loc => {
                if let Ok(text) = t.unescape() {
                    let url = text.trim().to_string();
                    if !url.is_empty() {
                        locations.push(url);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "sitemap parse ended early");
                break;
            }
        }
    }

    locations
}

/// Derive a display title from a URL: last path segment, hyphens to
/// spaces, each word capitalized.
fn title_from_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);

    let title = segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        url.to_string()
    } else {
        title
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
