use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    models::FormatCatalog,
    services::{HttpMediaResolver, HttpSearchProvider, LimitedResolver, MediaResolver, SearchProvider},
};

/// Shared application state
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub search_provider: Arc<dyn SearchProvider>,
    pub resolver: Arc<dyn MediaResolver>,
    pub formats: Arc<FormatCatalog>,
    /// Canonical video URL prefix, completed with the video id
    pub watch_url: Arc<str>,
}

impl AppState {
    pub fn new(
        search_provider: Arc<dyn SearchProvider>,
        resolver: Arc<dyn MediaResolver>,
        formats: FormatCatalog,
        watch_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            search_provider,
            resolver,
            formats: Arc::new(formats),
            watch_url: watch_url.into(),
        }
    }

    /// Builds the HTTP-backed providers described by `config`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let search_provider = HttpSearchProvider::new(config.search_settings())?;

        let http_resolver = HttpMediaResolver::new(
            config.resolver_url.clone(),
            config.resolver_timeout(),
            config.format_catalog(),
        )?;
        let resolver = LimitedResolver::new(Arc::new(http_resolver), config.resolver_concurrency);
        let formats = resolver.supported_formats();

        tracing::info!(
            search_url = %config.search_url,
            resolver_url = %config.resolver_url,
            resolver_concurrency = config.resolver_concurrency,
            formats = ?formats.all(),
            "Application state initialized"
        );

        Ok(Self::new(
            Arc::new(search_provider),
            Arc::new(resolver),
            formats,
            config.watch_url.as_str(),
        ))
    }

    pub fn video_url(&self, video_id: &str) -> String {
        format!("{}{}", self.watch_url, urlencoding::encode(video_id))
    }
}
