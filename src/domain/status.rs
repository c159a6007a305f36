use super::video::VideoId;
use serde::{Deserialize, Serialize};

pub const DOWNLOAD_MESSAGE: &str = "Use a YouTube downloader service with this URL";

/// Result of one status check. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    #[serde(rename = "isValid")]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_live: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VideoStatus {
    pub fn available(title: impl Into<String>, author: impl Into<String>, is_live: bool) -> Self {
        Self {
            valid: true,
            title: Some(title.into()),
            author: Some(author.into()),
            is_live: Some(is_live),
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            title: None,
            author: None,
            is_live: None,
            error: Some(error.into()),
        }
    }

    /// True only for a valid video reported live.
    pub fn is_live_now(&self) -> bool {
        self.valid && self.is_live.unwrap_or(false)
    }
}

/// Body accepted by both endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    #[serde(default)]
    pub video_id: Option<String>,
}

impl VideoRequest {
    pub fn for_video(video_id: &VideoId) -> Self {
        Self {
            video_id: Some(video_id.as_str().to_string()),
        }
    }

    pub fn video_id(&self) -> Option<VideoId> {
        self.video_id.clone().and_then(VideoId::new)
    }
}

/// Response of the download endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<VideoId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DownloadLink {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            download_url: None,
            message: None,
            video_id: None,
            error: Some(error.into()),
        }
    }
}
