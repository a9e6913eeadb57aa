use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Serialize;

use crate::{
    error::{AppError, AppResult, RouteError},
    middleware::request_id::RequestId,
    models::{Enveloped, MediaResult, Resolution, DEFAULT_FORMAT},
};

use super::{AppState, QueryParams};

const DOWNLOAD_ENDPOINT: &str = "/download";
const MP3_ENDPOINT: &str = "/mp3";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub endpoint: &'static str,
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub format: String,
    pub quality: String,
    pub duration: Option<u64>,
    pub download_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mp3Response {
    pub endpoint: &'static str,
    pub video_id: String,
    pub title: String,
    pub thumbnail: String,
    pub duration: Option<u64>,
    pub quality: String,
    pub download_url: String,
}

/// Asks the resolver for `video_id` in `format`, turning a declined
/// resolution into `ResolutionFailed` with `fallback` when no reason is given.
async fn resolve_media(
    state: &AppState,
    request_id: &RequestId,
    video_id: &str,
    format: &str,
    fallback: &str,
) -> AppResult<MediaResult> {
    let video_url = state.video_url(video_id);

    tracing::info!(
        request_id = %request_id,
        video_id = %video_id,
        format = %format,
        resolver = state.resolver.name(),
        "Resolving media"
    );

    match state.resolver.resolve(&video_url, format).await? {
        Resolution::Resolved(media) => Ok(media),
        Resolution::Failed { reason } => Err(AppError::ResolutionFailed(
            reason.unwrap_or_else(|| fallback.to_string()),
        )),
    }
}

/// Handler for the download endpoint
pub async fn download(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Enveloped<DownloadResponse>>, RouteError> {
    let params = QueryParams::extract(query, DOWNLOAD_ENDPOINT)?;
    let video_id = params.first("id").ok_or_else(|| {
        AppError::MissingParameter("Missing 'id' parameter".to_string()).at(DOWNLOAD_ENDPOINT)
    })?;
    let format = params
        .first("format")
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

    if !state.formats.contains(&format) {
        return Err(AppError::InvalidFormat {
            available: state.formats.all(),
        }
        .at(DOWNLOAD_ENDPOINT));
    }

    let media = resolve_media(&state, &request_id, &video_id, &format, "Failed to download")
        .await
        .map_err(|e| e.at(DOWNLOAD_ENDPOINT))?;

    Ok(Json(Enveloped::new(DownloadResponse {
        endpoint: DOWNLOAD_ENDPOINT,
        video_id,
        title: media.title,
        thumbnail: media.thumbnail_url,
        media_type: media.media_type,
        format: media.format,
        quality: media.quality,
        duration: media.duration_seconds,
        download_url: media.download_url,
    })))
}

/// Handler for the quick MP3 endpoint; format is always `mp3`
pub async fn mp3(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Enveloped<Mp3Response>>, RouteError> {
    let params = QueryParams::extract(query, MP3_ENDPOINT)?;
    let video_id = params
        .first("id")
        .ok_or_else(|| AppError::MissingParameter("Missing 'id'".to_string()).at(MP3_ENDPOINT))?;

    let media = resolve_media(
        &state,
        &request_id,
        &video_id,
        DEFAULT_FORMAT,
        "Failed to download MP3",
    )
    .await
    .map_err(|e| e.at(MP3_ENDPOINT))?;

    Ok(Json(Enveloped::new(Mp3Response {
        endpoint: MP3_ENDPOINT,
        video_id,
        title: media.title,
        thumbnail: media.thumbnail_url,
        duration: media.duration_seconds,
        quality: media.quality,
        download_url: media.download_url,
    })))
}
