use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Serialize;

use crate::{
    error::{AppError, RouteError},
    middleware::request_id::RequestId,
    models::{Enveloped, SearchResults},
};

use super::{AppState, QueryParams};

const ENDPOINT: &str = "/search";

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub endpoint: &'static str,
    pub query: String,
    pub results: SearchResults,
}

/// Handler for video search endpoint
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Enveloped<SearchResponse>>, RouteError> {
    let params = QueryParams::extract(query, ENDPOINT)?;
    let query = params
        .first("q")
        .ok_or_else(|| AppError::MissingParameter("Missing search query".to_string()).at(ENDPOINT))?;

    tracing::info!(
        request_id = %request_id,
        query = %query,
        provider = state.search_provider.name(),
        "Processing search request"
    );

    let results = state
        .search_provider
        .search(&query)
        .await
        .map_err(|e| e.at(ENDPOINT))?;

    Ok(Json(Enveloped::new(SearchResponse {
        endpoint: ENDPOINT,
        query,
        results,
    })))
}
