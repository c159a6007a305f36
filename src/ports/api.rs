use crate::domain::status::{DownloadLink, VideoStatus};
use crate::domain::video::VideoId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// The check/download endpoints as seen by a polling client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoApi: Send + Sync {
    async fn check_video(&self, video_id: &VideoId) -> Result<VideoStatus, ApiError>;

    async fn download_video(&self, video_id: &VideoId) -> Result<DownloadLink, ApiError>;
}
