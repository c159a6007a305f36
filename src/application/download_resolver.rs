use crate::domain::status::{DownloadLink, DOWNLOAD_MESSAGE};
use crate::domain::video::VideoId;

/// Formats the canonical watch link for a video.
///
/// Nothing is fetched or transcoded and the id is not re-validated; the caller
/// hands the link to an external downloader.
#[derive(Clone, Copy, Debug, Default)]
pub struct DownloadResolver;

impl DownloadResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, video_id: &VideoId) -> DownloadLink {
        DownloadLink {
            success: true,
            download_url: Some(video_id.canonical_watch_url()),
            message: Some(DOWNLOAD_MESSAGE.to_string()),
            video_id: Some(video_id.clone()),
            error: None,
        }
    }
}
