use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Public host every canonical watch link points at.
pub const CANONICAL_WATCH_BASE: &str = "https://www.youtube.com";

/// Tried in order, first capture wins.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/live/)([^&\s]+)").unwrap(),
        Regex::new(r"youtube\.com/embed/([^&\s]+)").unwrap(),
    ]
});

/// Opaque video identifier as it appeared in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps a raw identifier. Returns `None` for an empty string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/watch?v={id}`, with any trailing slash on `base` ignored.
    pub fn watch_url(&self, base: &str) -> String {
        format!("{}/watch?v={}", base.trim_end_matches('/'), self.0)
    }

    pub fn canonical_watch_url(&self) -> String {
        self.watch_url(CANONICAL_WATCH_BASE)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pulls the video identifier out of a pasted YouTube URL.
///
/// Recognises `watch?v=`, `youtu.be/`, `youtube.com/live/` and
/// `youtube.com/embed/`. The captured group stops at `&` or whitespace and is
/// otherwise returned untouched.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(input))
        .and_then(|caps| caps.get(1))
        .and_then(|m| VideoId::new(m.as_str()))
}
