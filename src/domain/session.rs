use serde::{Deserialize, Serialize};

pub const MSG_EMPTY_URL: &str = "Please enter a YouTube URL";
pub const MSG_INVALID_URL: &str = "Invalid YouTube URL. Please check and try again.";
pub const MSG_VIDEO_NOT_FOUND: &str = "Invalid YouTube video or video not found";
pub const MSG_PROCESS_FAILED: &str = "Failed to process video";
pub const MSG_DOWNLOAD_REQUEST_FAILED: &str = "Failed to process download request";

/// Where a session is in its lifecycle.
///
/// `Completed` and `Error` are terminal until the session is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Idle,
    Validating,
    Live,
    Processing,
    Completed,
    Error,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub download_url: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub info: VideoInfo,
}

impl SessionSnapshot {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: SessionStatus::Error,
            info: VideoInfo {
                error_message: Some(message.into()),
                ..VideoInfo::default()
            },
        }
    }
}
