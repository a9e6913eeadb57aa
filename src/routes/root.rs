use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::models::{Enveloped, DEFAULT_FORMAT};

use super::AppState;

/// Capability document: endpoints, their parameters and the format catalog
pub async fn index(State(state): State<AppState>) -> Json<Enveloped<Value>> {
    let formats = &state.formats;

    Json(Enveloped::new(json!({
        "endpoints": {
            "search": {
                "path": "/search",
                "method": "GET",
                "description": "Search for videos",
                "parameters": {
                    "q": "Search query (required)"
                },
                "example": "/search?q=music"
            },
            "download": {
                "path": "/download",
                "method": "GET",
                "description": "Resolve a video to a direct download in the requested format",
                "parameters": {
                    "id": "Video ID (required)",
                    "format": format!("Video quality or audio format (optional, default: {})", DEFAULT_FORMAT)
                },
                "available_formats": formats.all(),
                "example": "/download?id=dQw4w9WgXcQ&format=720"
            },
            "mp3": {
                "path": "/mp3",
                "method": "GET",
                "description": "Quick MP3 download",
                "parameters": {
                    "id": "Video ID (required)"
                },
                "example": "/mp3?id=dQw4w9WgXcQ"
            }
        },
        "formats": {
            "audio": formats.audio(),
            "video": formats.video(),
            "all": formats.all()
        }
    })))
}
