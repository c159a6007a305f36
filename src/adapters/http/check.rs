use super::{AppState, MSG_ID_REQUIRED, MSG_INVALID_BODY};
use crate::domain::status::{VideoRequest, VideoStatus};
use crate::ports::metadata::MetadataPort;
use crate::ports::page::WatchPagePort;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

/// `POST /check-video`
pub async fn handle<M, P>(
    State(state): State<Arc<AppState<M, P>>>,
    body: Result<Json<VideoRequest>, JsonRejection>,
) -> (StatusCode, Json<VideoStatus>)
where
    M: MetadataPort,
    P: WatchPagePort,
{
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Failed to parse request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(VideoStatus::invalid(MSG_INVALID_BODY)),
            );
        }
    };

    let Some(video_id) = request.video_id() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(VideoStatus::invalid(MSG_ID_REQUIRED)),
        );
    };

    match state.checker.check(&video_id).await {
        Ok(status) => (StatusCode::OK, Json(status)),
        Err(e) => {
            tracing::error!(%video_id, error = %e, "Unexpected error in check-video");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(VideoStatus::invalid(format!(
                    "Failed to check video status: {}",
                    e
                ))),
            )
        }
    }
}
