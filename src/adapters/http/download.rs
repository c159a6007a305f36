use super::{AppState, MSG_ID_REQUIRED};
use crate::domain::session::MSG_DOWNLOAD_REQUEST_FAILED;
use crate::domain::status::{DownloadLink, VideoRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

/// `POST /download-video`
pub async fn handle<M, P>(
    State(state): State<Arc<AppState<M, P>>>,
    body: Result<Json<VideoRequest>, JsonRejection>,
) -> (StatusCode, Json<DownloadLink>) {
    // An unreadable body is an internal failure here, unlike /check-video.
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Failed to process download request");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DownloadLink::failed(MSG_DOWNLOAD_REQUEST_FAILED)),
            );
        }
    };

    match request.video_id() {
        Some(video_id) => {
            tracing::info!(%video_id, "Resolving download link");
            (StatusCode::OK, Json(state.resolver.resolve(&video_id)))
        }
        None => (
            StatusCode::BAD_REQUEST,
            Json(DownloadLink::failed(MSG_ID_REQUIRED)),
        ),
    }
}
