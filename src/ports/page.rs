use super::error::UpstreamError;
use crate::domain::video::VideoId;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WatchPagePort: Send + Sync {
    /// Fetch the raw HTML of the public watch page.
    /// Non-2xx responses are `UpstreamError::Status`.
    async fn fetch_watch_page(&self, video_id: &VideoId) -> Result<String, UpstreamError>;
}
