use serde::{Deserialize, Serialize};

/// Direct download metadata produced by a media resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResult {
    pub title: String,
    pub thumbnail_url: String,
    /// "audio" or "video"
    pub media_type: String,
    pub format: String,
    pub quality: String,
    pub duration_seconds: Option<u64>,
    pub download_url: String,
}

/// Outcome of asking a resolver for a media URL
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(MediaResult),
    /// The resolver declined; `reason` is shown to the client when present
    Failed { reason: Option<String> },
}

impl Resolution {
    pub fn failed(reason: impl Into<String>) -> Self {
        Resolution::Failed {
            reason: Some(reason.into()),
        }
    }
}
