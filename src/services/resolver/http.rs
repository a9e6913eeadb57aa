use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{FormatCatalog, MediaResult, Resolution},
    services::resolver::MediaResolver,
};

/// Reply of the conversion service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolverReply {
    success: bool,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    thumbnail_url: Option<String>,
    #[serde(default)]
    media_type: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    quality: Option<String>,
    #[serde(default)]
    duration_seconds: Option<u64>,
    #[serde(default)]
    download_url: Option<String>,
}

impl ResolverReply {
    fn into_resolution(self, requested_format: &str, catalog: &FormatCatalog) -> Resolution {
        if !self.success {
            return Resolution::Failed {
                reason: self.reason.filter(|r| !r.is_empty()),
            };
        }

        let Some(download_url) = self.download_url.filter(|u| !u.is_empty()) else {
            return Resolution::failed("Resolver returned no download URL");
        };

        let media_type = self.media_type.unwrap_or_else(|| {
            if catalog.is_audio(requested_format) {
                "audio".to_string()
            } else {
                "video".to_string()
            }
        });

        Resolution::Resolved(MediaResult {
            title: self.title.unwrap_or_default(),
            thumbnail_url: self.thumbnail_url.unwrap_or_default(),
            media_type,
            format: self
                .format
                .unwrap_or_else(|| requested_format.to_string()),
            quality: self.quality.unwrap_or_default(),
            duration_seconds: self.duration_seconds,
            download_url,
        })
    }
}

/// Resolver backed by an HTTP conversion service
///
/// Issues `GET {url}?url=<video>&format=<format>` and expects a JSON reply
/// with a `success` flag.
#[derive(Clone)]
pub struct HttpMediaResolver {
    http_client: HttpClient,
    api_url: String,
    formats: FormatCatalog,
}

impl HttpMediaResolver {
    pub fn new(
        api_url: String,
        timeout: Option<Duration>,
        formats: FormatCatalog,
    ) -> AppResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            api_url,
            formats,
        })
    }
}

#[async_trait::async_trait]
impl MediaResolver for HttpMediaResolver {
    async fn resolve(&self, video_url: &str, format: &str) -> AppResult<Resolution> {
        let response = match self
            .http_client
            .get(&self.api_url)
            .query(&[("url", video_url), ("format", format)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, video_url = %video_url, "Resolver unreachable");
                return Ok(Resolution::failed(e.to_string()));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Resolver returned error status");
            return Ok(Resolution::failed(format!(
                "Resolver returned status {}",
                status
            )));
        }

        let reply: ResolverReply = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Malformed resolver reply: {}", e)))?;

        let resolution = reply.into_resolution(format, &self.formats);

        tracing::info!(
            video_url = %video_url,
            format = %format,
            resolved = matches!(resolution, Resolution::Resolved(_)),
            resolver = self.name(),
            "Resolution finished"
        );

        Ok(resolution)
    }

    fn supported_formats(&self) -> FormatCatalog {
        self.formats.clone()
    }

    fn name(&self) -> &'static str {
        "http_resolver"
    }
}
