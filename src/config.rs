use std::time::Duration;

use serde::Deserialize;

use crate::{models::FormatCatalog, services::search::SearchSettings};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream search provider endpoint, queried with `?q=`
    #[serde(default = "default_search_url")]
    pub search_url: String,

    #[serde(default = "default_search_timeout_secs")]
    pub search_timeout_secs: u64,

    /// User agent sent to the search provider
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Anchors must reference this domain to survive the markup scrape
    #[serde(default = "default_link_domain")]
    pub link_domain: String,

    /// Prefix of the convenience link derived for structured results
    #[serde(default = "default_derived_link_base")]
    pub derived_link_base: String,

    /// Canonical video URL prefix, completed with the video id
    #[serde(default = "default_watch_url")]
    pub watch_url: String,

    /// Media conversion service endpoint
    #[serde(default = "default_resolver_url")]
    pub resolver_url: String,

    /// Unset leaves the conversion service's own policy in charge
    #[serde(default)]
    pub resolver_timeout_secs: Option<u64>,

    /// Maximum number of in-flight conversion requests
    #[serde(default = "default_resolver_concurrency")]
    pub resolver_concurrency: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_search_url() -> String {
    "https://wwd.mp3juice.blog/search.php".to_string()
}

fn default_search_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

fn default_link_domain() -> String {
    "youtube.com".to_string()
}

fn default_derived_link_base() -> String {
    "https://tubidy.cv/dl".to_string()
}

fn default_watch_url() -> String {
    "https://www.youtube.com/watch?v=".to_string()
}

fn default_resolver_url() -> String {
    "http://127.0.0.1:8088/resolve".to_string()
}

fn default_resolver_concurrency() -> usize {
    8
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            url: self.search_url.clone(),
            timeout: Duration::from_secs(self.search_timeout_secs),
            user_agent: self.user_agent.clone(),
            link_domain: self.link_domain.clone(),
            derived_link_base: self.derived_link_base.clone(),
        }
    }

    pub fn resolver_timeout(&self) -> Option<Duration> {
        self.resolver_timeout_secs.map(Duration::from_secs)
    }

    /// Formats accepted by `/download`. Matches what the conversion service advertises.
    pub fn format_catalog(&self) -> FormatCatalog {
        FormatCatalog::default()
    }
}
