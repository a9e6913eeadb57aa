//! Upstream search provider abstraction
//!
//! The provider is queried over plain HTTP and answers either with a JSON
//! document listing items or with an HTML page. Both shapes are normalized
//! into [`SearchResults`] by [`parser::parse_payload`].

use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::SearchResults,
};

pub mod parser;

pub use parser::parse_payload;

/// Trait for search backends
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search for videos matching `query`
    async fn search(&self, query: &str) -> AppResult<SearchResults>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Settings for [`HttpSearchProvider`]
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Anchors must reference this domain to survive the markup scrape
    pub link_domain: String,
    /// Prefix for the convenience link derived from structured items
    pub derived_link_base: String,
}

#[derive(Clone)]
pub struct HttpSearchProvider {
    http_client: HttpClient,
    settings: SearchSettings,
}

impl HttpSearchProvider {
    pub fn new(settings: SearchSettings) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    async fn fetch(&self, query: &str) -> Result<String, reqwest::Error> {
        self.http_client
            .get(&self.settings.url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait::async_trait]
impl SearchProvider for HttpSearchProvider {
    async fn search(&self, query: &str) -> AppResult<SearchResults> {
        let body = self.fetch(query).await.map_err(|e| {
            if e.is_timeout() {
                AppError::Upstream(format!(
                    "Search provider timed out after {}s",
                    self.settings.timeout.as_secs_f32()
                ))
            } else {
                AppError::Upstream(e.to_string())
            }
        })?;

        let results = parse_payload(&body, &self.settings)?;

        tracing::info!(
            query = %query,
            results = results.len(),
            shape = results.kind(),
            provider = self.name(),
            "Search completed"
        );

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "http_search"
    }
}
