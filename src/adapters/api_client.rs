//! `VideoApi` over HTTP, for clients polling a running livewait server.

use crate::domain::status::{DownloadLink, VideoRequest, VideoStatus};
use crate::domain::video::VideoId;
use crate::ports::api::{ApiError, VideoApi};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct HttpVideoApi {
    client: Client,
    base_url: String,
}

impl HttpVideoApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl VideoApi for HttpVideoApi {
    async fn check_video(&self, video_id: &VideoId) -> Result<VideoStatus, ApiError> {
        let status = self
            .client
            .post(self.endpoint("/check-video"))
            .json(&VideoRequest::for_video(video_id))
            .send()
            .await?
            .json::<VideoStatus>()
            .await?;
        Ok(status)
    }

    async fn download_video(&self, video_id: &VideoId) -> Result<DownloadLink, ApiError> {
        let link = self
            .client
            .post(self.endpoint("/download-video"))
            .json(&VideoRequest::for_video(video_id))
            .send()
            .await?
            .json::<DownloadLink>()
            .await?;
        Ok(link)
    }
}
