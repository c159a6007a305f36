use crate::config::NetworkFallback;
use crate::domain::signals::{MarkerExtractor, SignalExtractor, DEFAULT_AUTHOR, DEFAULT_TITLE};
use crate::domain::status::VideoStatus;
use crate::domain::video::VideoId;
use crate::ports::metadata::MetadataPort;
use crate::ports::page::WatchPagePort;
use crate::ports::UpstreamError;
use thiserror::Error;

pub const MSG_NOT_FOUND: &str = "Video not found";
pub const MSG_UNAVAILABLE: &str = "Video not found or unavailable";

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("watch page unreachable: {0}")]
    Unreachable(UpstreamError),
}

/// Two-tier live/VOD detection: oEmbed first, watch page scraping second.
pub struct StatusChecker<M, P, E = MarkerExtractor> {
    metadata: M,
    page: P,
    extractor: E,
    fallback: NetworkFallback,
}

impl<M, P> StatusChecker<M, P, MarkerExtractor>
where
    M: MetadataPort,
    P: WatchPagePort,
{
    pub fn new(metadata: M, page: P, fallback: NetworkFallback) -> Self {
        Self::with_extractor(metadata, page, MarkerExtractor::default(), fallback)
    }
}

impl<M, P, E> StatusChecker<M, P, E>
where
    M: MetadataPort,
    P: WatchPagePort,
    E: SignalExtractor,
{
    pub fn with_extractor(metadata: M, page: P, extractor: E, fallback: NetworkFallback) -> Self {
        Self {
            metadata,
            page,
            extractor,
            fallback,
        }
    }

    pub fn fallback(&self) -> NetworkFallback {
        self.fallback
    }

    pub async fn check(&self, video_id: &VideoId) -> Result<VideoStatus, CheckError> {
        tracing::info!(%video_id, "Checking video");

        // oEmbed only serves fully processed videos, so any hit is not live.
        match self.metadata.fetch_oembed(video_id).await {
            Ok(oembed) => {
                tracing::info!(%video_id, "oEmbed success, video is available");
                return Ok(VideoStatus::available(
                    oembed.title,
                    oembed.author_name,
                    false,
                ));
            }
            Err(e) => tracing::info!(%video_id, error = %e, "oEmbed lookup failed, scraping watch page"),
        }

        let html = match self.page.fetch_watch_page(video_id).await {
            Ok(html) => html,
            Err(UpstreamError::Status(status)) => {
                tracing::warn!(%video_id, status, "Watch page not found");
                return Ok(VideoStatus::invalid(MSG_NOT_FOUND));
            }
            Err(e) => return self.unreachable(video_id, e),
        };

        let signals = self.extractor.extract(&html);
        if signals.unavailable {
            tracing::info!(%video_id, "Video unavailable");
            return Ok(VideoStatus::invalid(MSG_UNAVAILABLE));
        }

        tracing::info!(%video_id, is_live = signals.live, "Watch page scraped");
        Ok(VideoStatus::available(
            signals.title_or_default(),
            signals.author_or_default(),
            signals.live,
        ))
    }

    fn unreachable(&self, video_id: &VideoId, err: UpstreamError) -> Result<VideoStatus, CheckError> {
        tracing::error!(%video_id, error = %err, fallback = ?self.fallback, "Watch page fetch error");
        match self.fallback {
            NetworkFallback::AssumeLive => {
                Ok(VideoStatus::available(DEFAULT_TITLE, DEFAULT_AUTHOR, true))
            }
            NetworkFallback::ReportFailure => Err(CheckError::Unreachable(err)),
        }
    }
}
