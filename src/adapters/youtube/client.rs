use crate::config::AppConfig;
use crate::ports::UpstreamError;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the oEmbed endpoint and the public watch pages.
#[derive(Clone, Debug)]
pub struct YouTubeClient {
    pub(super) client: Client,
    pub(super) oembed_endpoint: String,
    pub(super) watch_base_url: String,
}

impl YouTubeClient {
    pub fn new(
        oembed_endpoint: impl Into<String>,
        watch_base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            UpstreamError::Unreachable(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            oembed_endpoint: oembed_endpoint.into(),
            watch_base_url: watch_base_url.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, UpstreamError> {
        Self::new(
            config.oembed_endpoint.clone(),
            config.watch_base_url.clone(),
            config.http_timeout,
        )
    }
}
