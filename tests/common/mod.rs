//! Shared fixtures: a fake YouTube upstream and a livewait server on
//! ephemeral ports.
#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use livewait::adapters::http::{router, AppState};
use livewait::adapters::youtube::YouTubeClient;
use livewait::{NetworkFallback, StatusChecker};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const LIVE_PAGE: &str = r#"<html><head><title>Launch day - YouTube</title></head>
<script>var ytInitialPlayerResponse = {"videoDetails":{"author":"Space Channel","isLiveContent":true}};</script></html>"#;

pub const UNAVAILABLE_PAGE: &str = r#"<html><head><title>YouTube</title></head>
<div>Video unavailable</div><script>{"playabilityStatus":{"status":"ERROR"}}</script></html>"#;

pub const PROCESSING_PAGE: &str = r#"<html><head><title>Fresh upload - YouTube</title></head>
<script>{"videoDetails":{"author":"Uploader"}}</script></html>"#;

/// Counts requests and decides when the live stream "ends".
#[derive(Default)]
pub struct Upstream {
    /// oEmbed keeps failing for `live1` until this many lookups have been served.
    pub live_lookups: usize,
    pub oembed_hits: AtomicUsize,
    pub page_hits: AtomicUsize,
}

async fn oembed(
    State(upstream): State<Arc<Upstream>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let n = upstream.oembed_hits.fetch_add(1, Ordering::SeqCst);
    if params.get("format").map(String::as_str) != Some("json") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    let url = params.get("url").cloned().unwrap_or_default();
    let id = url.rsplit("v=").next().unwrap_or_default();

    match id {
        "vod1" => Json(json!({
            "title": "Finished broadcast",
            "author_name": "Space Channel",
            "type": "video"
        }))
        .into_response(),
        "live1" if n >= upstream.live_lookups => Json(json!({
            "title": "Launch day",
            "author_name": "Space Channel"
        }))
        .into_response(),
        "badjson" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn watch(
    State(upstream): State<Arc<Upstream>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    upstream.page_hits.fetch_add(1, Ordering::SeqCst);
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !agent.contains("Chrome") {
        return StatusCode::FORBIDDEN.into_response();
    }

    let page = match params.get("v").map(String::as_str) {
        Some("live1") => LIVE_PAGE,
        Some("gone") => UNAVAILABLE_PAGE,
        Some("proc") | Some("badjson") => PROCESSING_PAGE,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    ([(header::CONTENT_TYPE, "text/html")], page).into_response()
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Start the fake upstream. Returns its base URL.
pub async fn spawn_upstream(upstream: Arc<Upstream>) -> String {
    let app = Router::new()
        .route("/oembed", get(oembed))
        .route("/watch", get(watch))
        .with_state(upstream);
    format!("http://{}", serve(app).await)
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn youtube_client(base: &str) -> YouTubeClient {
    YouTubeClient::new(format!("{}/oembed", base), base, Duration::from_secs(5)).unwrap()
}

pub fn checker(base: &str, fallback: NetworkFallback) -> StatusChecker<YouTubeClient, YouTubeClient> {
    let client = youtube_client(base);
    StatusChecker::new(client.clone(), client, fallback)
}

/// Start a livewait server scraping `upstream_base`. Returns its base URL.
pub async fn spawn_server(upstream_base: &str, fallback: NetworkFallback) -> String {
    let app = router(AppState::new(checker(upstream_base, fallback)));
    format!("http://{}", serve(app).await)
}
