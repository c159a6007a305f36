use super::{YouTubeClient, BROWSER_ACCEPT, BROWSER_ACCEPT_LANGUAGE, BROWSER_USER_AGENT};
use crate::domain::video::VideoId;
use crate::ports::page::WatchPagePort;
use crate::ports::UpstreamError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

#[async_trait]
impl WatchPagePort for YouTubeClient {
    async fn fetch_watch_page(&self, video_id: &VideoId) -> Result<String, UpstreamError> {
        let url = video_id.watch_url(&self.watch_base_url);
        tracing::debug!(%video_id, %url, "Fetching watch page");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, BROWSER_ACCEPT)
            .header(ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%video_id, status = status.as_u16(), "Watch page fetch failed");
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;
        tracing::debug!(%video_id, length = body.len(), "Watch page received");
        Ok(body)
    }
}
