use super::{YouTubeClient, OEMBED_USER_AGENT};
use crate::domain::video::VideoId;
use crate::ports::metadata::{MetadataPort, OEmbed};
use crate::ports::UpstreamError;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;

#[async_trait]
impl MetadataPort for YouTubeClient {
    async fn fetch_oembed(&self, video_id: &VideoId) -> Result<OEmbed, UpstreamError> {
        let watch_url = video_id.watch_url(&self.watch_base_url);
        tracing::debug!(%video_id, endpoint = %self.oembed_endpoint, "Trying oEmbed");

        let response = self
            .client
            .get(&self.oembed_endpoint)
            .query(&[("url", watch_url.as_str()), ("format", "json")])
            .header(USER_AGENT, OEMBED_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%video_id, status = status.as_u16(), "oEmbed response");
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json::<OEmbed>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
