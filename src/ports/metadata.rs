use super::error::UpstreamError;
use crate::domain::video::VideoId;
use async_trait::async_trait;
use serde::Deserialize;

/// The subset of an oEmbed payload this crate reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OEmbed {
    pub title: String,
    pub author_name: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataPort: Send + Sync {
    /// Look up oEmbed metadata. Only fully processed videos are served, so a
    /// successful lookup implies the video is not live.
    async fn fetch_oembed(&self, video_id: &VideoId) -> Result<OEmbed, UpstreamError>;
}
