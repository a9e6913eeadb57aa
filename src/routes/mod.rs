use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    models::Enveloped,
};

pub mod download;
mod params;
pub mod root;
pub mod search;
mod state;

pub use params::QueryParams;
pub use state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/health", get(health_check))
        .route("/search", get(search::search))
        .route("/download", get(download::download))
        .route("/mp3", get(download::mp3))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Enveloped<Value>>) {
    (
        StatusCode::OK,
        Json(Enveloped::new(json!({ "status": "healthy" }))),
    )
}
