use std::{collections::HashMap, time::Duration};

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use ytdl_gateway::{
    error::AppError,
    models::SearchResults,
    services::{HttpSearchProvider, SearchProvider, SearchSettings},
};

/// Serves a deterministic upstream on an ephemeral port
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/json",
            get(
                |Query(params): Query<HashMap<String, String>>, headers: HeaderMap| async move {
                    let query = params.get("q").cloned().unwrap_or_default();
                    let agent = headers
                        .get(header::USER_AGENT)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    Json(json!({
                        "items": [
                            { "title": query, "id": "q1", "duration": "1:00", "channelTitle": agent },
                            { "title": "Other Song", "id": "q2", "source": "yt" }
                        ]
                    }))
                },
            ),
        )
        .route(
            "/html",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html")],
                    r#"<html><body>
                        <a href="https://www.youtube.com/watch?v=aaa">Alpha</a>
                        <a href="https://mirror.example/watch?v=bbb">Mirror</a>
                        <a href="https://youtube.com/watch?v=ccc">Gamma</a>
                    </body></html>"#,
                )
                    .into_response()
            }),
        )
        .route(
            "/broken",
            get(|| async { Json(json!({ "items": { "title": "not a list" } })) }),
        )
        .route(
            "/down",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "items": [] }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn provider(base: &str, path: &str, timeout: Duration) -> HttpSearchProvider {
    HttpSearchProvider::new(SearchSettings {
        url: format!("{}{}", base, path),
        timeout,
        user_agent: "fixture-agent/1.0".to_string(),
        link_domain: "youtube.com".to_string(),
        derived_link_base: "https://links.local/dl".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_structured_upstream() {
    let base = spawn_upstream().await;
    let provider = provider(&base, "/json", Duration::from_secs(10));

    let results = provider.search("night drive").await.unwrap();
    let SearchResults::Structured(items) = results else {
        panic!("expected structured results");
    };

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "night drive");
    assert_eq!(items[0].channel.as_deref(), Some("fixture-agent/1.0"));
    assert_eq!(
        items[0].derived_link_url.as_deref(),
        Some("https://links.local/dl/night%20drive/q1")
    );
    assert_eq!(items[1].source.as_deref(), Some("yt"));
}

#[tokio::test]
async fn test_identical_queries_yield_identical_results() {
    let base = spawn_upstream().await;
    let provider = provider(&base, "/json", Duration::from_secs(10));

    let first = provider.search("foo").await.unwrap();
    let second = provider.search("foo").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_markup_upstream_is_scraped() {
    let base = spawn_upstream().await;
    let provider = provider(&base, "/html", Duration::from_secs(10));

    let SearchResults::Scraped(links) = provider.search("anything").await.unwrap() else {
        panic!("expected scraped results");
    };

    let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Gamma"]);
    assert_eq!(links[1].url, "https://youtube.com/watch?v=ccc");
}

#[tokio::test]
async fn test_unparseable_payload() {
    let base = spawn_upstream().await;
    let provider = provider(&base, "/broken", Duration::from_secs(10));

    let result = provider.search("foo").await;
    assert!(matches!(result, Err(AppError::Upstream(_))));
}

#[tokio::test]
async fn test_error_status_is_upstream_error() {
    let base = spawn_upstream().await;
    let provider = provider(&base, "/down", Duration::from_secs(10));

    match provider.search("foo").await {
        Err(AppError::Upstream(reason)) => assert!(reason.contains("503")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_upstream_error() {
    let base = spawn_upstream().await;
    let provider = provider(&base, "/slow", Duration::from_millis(200));

    match provider.search("foo").await {
        Err(AppError::Upstream(reason)) => assert!(reason.contains("timed out")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_upstream() {
    let provider = provider("http://127.0.0.1:1", "/json", Duration::from_secs(2));

    let result = provider.search("foo").await;
    assert!(matches!(result, Err(AppError::Upstream(_))));
}
