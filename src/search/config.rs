// Search configuration

use std::path::Path;

use tracing::{debug, warn};

use super::error::Result;

/// One remote sitemap document
#[derive(Debug, Clone)]
pub struct SitemapSource {
    /// Short name used in logs and in the skipped-sources report
    pub name: String,
    /// Sitemap URL
    pub url: String,
}

impl SitemapSource {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Search module configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Product manual sitemap, always searched first
    pub manual: SitemapSource,
    /// Community forum sitemap
    pub forum: SitemapSource,
    /// Per-source fetch timeout in seconds
    pub fetch_timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            manual: SitemapSource::new("manual", "https://docs.toolgate.dev/sitemap.xml"),
            forum: SitemapSource::new("forum", "https://forum.toolgate.dev/sitemap.xml"),
            fetch_timeout_secs: 5,
        }
    }
}

/// Parse an environment variable, logging a warning if the value is present but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

impl SearchConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TOOLGATE_MANUAL_SITEMAP") {
            config.manual.url = url;
        }
        if let Ok(url) = std::env::var("TOOLGATE_FORUM_SITEMAP") {
            config.forum.url = url;
        }
        config.fetch_timeout_secs =
            parse_env_var("TOOLGATE_FETCH_TIMEOUT_SECS", config.fetch_timeout_secs);
        config
    }

    /// Apply URL overrides from a TOML sources file, if it exists.
    ///
    /// Expected shape:
    ///
    /// ```toml
    /// [manual]
    /// url = "https://docs.example.com/sitemap.xml"
    ///
    /// [forum]
    /// url = "https://forum.example.com/sitemap.xml"
    /// ```
    pub fn apply_sources_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            debug!(path = %path.display(), "sources file not found, using configured sitemaps");
            return Ok(());
        }

        let content = std::fs::read_to_string(path)?;
        let value: toml::Value = content.parse()?;

        for (name, target) in [
            ("manual", &mut self.manual),
            ("forum", &mut self.forum),
        ] {
            if let Some(url) = value
                .get(name)
                .and_then(|section| section.get("url"))
                .and_then(|url| url.as_str())
            {
                target.url = url.to_string();
            }
        }

        debug!(path = %path.display(), "loaded sitemap sources from config");
        Ok(())
    }
}
