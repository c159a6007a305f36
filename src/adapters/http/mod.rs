//! HTTP inbound adapter.
//!
//! Serves the check/download endpoints and the form page that drives them.

mod check;
mod download;
mod form;

use crate::application::{DownloadResolver, StatusChecker};
use crate::ports::metadata::MetadataPort;
use crate::ports::page::WatchPagePort;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const MSG_ID_REQUIRED: &str = "Video ID is required";
pub const MSG_INVALID_BODY: &str = "Invalid request body";

/// Shared by every handler. Holds no per-request state.
pub struct AppState<M, P> {
    pub checker: StatusChecker<M, P>,
    pub resolver: DownloadResolver,
}

impl<M, P> AppState<M, P> {
    pub fn new(checker: StatusChecker<M, P>) -> Self {
        Self {
            checker,
            resolver: DownloadResolver::new(),
        }
    }
}

pub fn router<M, P>(state: AppState<M, P>) -> Router
where
    M: MetadataPort + 'static,
    P: WatchPagePort + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(form::handle))
        .route("/check-video", post(check::handle::<M, P>))
        .route("/download-video", post(download::handle::<M, P>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkFallback;
    use crate::ports::metadata::{MockMetadataPort, OEmbed};
    use crate::ports::page::MockWatchPagePort;
    use crate::ports::UpstreamError;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(metadata: MockMetadataPort, page: MockWatchPagePort, fallback: NetworkFallback) -> Router {
        router(AppState::new(StatusChecker::new(metadata, page, fallback)))
    }

    fn idle_app() -> Router {
        let mut metadata = MockMetadataPort::new();
        metadata.expect_fetch_oembed().never();
        let mut page = MockWatchPagePort::new();
        page.expect_fetch_watch_page().never();
        app(metadata, page, NetworkFallback::AssumeLive)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_check_video_oembed_hit() {
        let mut metadata = MockMetadataPort::new();
        metadata.expect_fetch_oembed().times(1).returning(|_| {
            Ok(OEmbed {
                title: "T".to_string(),
                author_name: "A".to_string(),
            })
        });
        let mut page = MockWatchPagePort::new();
        page.expect_fetch_watch_page().never();

        let (status, body) = send(
            app(metadata, page, NetworkFallback::AssumeLive),
            post_json("/check-video", r#"{"videoId":"dQw4w9WgXcQ"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"isValid": true, "title": "T", "author": "A", "isLive": false})
        );
    }

    #[tokio::test]
    async fn test_check_video_scraped_live() {
        let mut metadata = MockMetadataPort::new();
        metadata
            .expect_fetch_oembed()
            .returning(|_| Err(UpstreamError::Status(401)));
        let mut page = MockWatchPagePort::new();
        page.expect_fetch_watch_page()
            .returning(|_| Ok(r#"<title>Now - YouTube</title>"author":"Ch""isLiveContent":true"#.to_string()));

        let (status, body) = send(
            app(metadata, page, NetworkFallback::AssumeLive),
            post_json("/check-video", r#"{"videoId":"live1"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"isValid": true, "title": "Now", "author": "Ch", "isLive": true})
        );
    }

    #[tokio::test]
    async fn test_check_video_missing_id() {
        let (status, body) = send(idle_app(), post_json("/check-video", "{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"isValid": false, "error": MSG_ID_REQUIRED}));

        let (status, _) = send(idle_app(), post_json("/check-video", r#"{"videoId":""}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_check_video_malformed_body() {
        let (status, body) = send(idle_app(), post_json("/check-video", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"isValid": false, "error": MSG_INVALID_BODY}));
    }

    #[tokio::test]
    async fn test_check_video_report_failure_is_500() {
        let mut metadata = MockMetadataPort::new();
        metadata
            .expect_fetch_oembed()
            .returning(|_| Err(UpstreamError::Unreachable("dns".to_string())));
        let mut page = MockWatchPagePort::new();
        page.expect_fetch_watch_page()
            .returning(|_| Err(UpstreamError::Unreachable("dns".to_string())));

        let (status, body) = send(
            app(metadata, page, NetworkFallback::ReportFailure),
            post_json("/check-video", r#"{"videoId":"abc"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["isValid"], json!(false));
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to check video status: "));
    }

    #[tokio::test]
    async fn test_download_video() {
        let (status, body) = send(
            idle_app(),
            post_json("/download-video", r#"{"videoId":"abc123"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "downloadUrl": "https://www.youtube.com/watch?v=abc123",
                "message": "Use a YouTube downloader service with this URL",
                "videoId": "abc123"
            })
        );
    }

    #[tokio::test]
    async fn test_download_video_errors() {
        let (status, body) = send(idle_app(), post_json("/download-video", r#"{"videoId":null}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": MSG_ID_REQUIRED}));

        let (status, body) = send(idle_app(), post_json("/download-video", "[")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"success": false, "error": "Failed to process download request"})
        );
    }

    #[tokio::test]
    async fn test_form_page() {
        let response = idle_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/check-video"));
        assert!(html.contains("/download-video"));
    }
}
