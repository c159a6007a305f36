//! Watch-page signal extraction.
//!
//! The public watch page carries no stable API, so everything this crate
//! learns from it goes through a [`SignalExtractor`]. Marker strings are kept
//! in a versioned [`MarkerSet`]; when the upstream markup drifts, the tests in
//! this module are the ones that should start failing.

use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_TITLE: &str = "YouTube Video";
pub const DEFAULT_AUTHOR: &str = "Unknown";

const TITLE_SUFFIX: &str = " - YouTube";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<title>([^<]+)</title>").unwrap());
static AUTHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""author":"([^"]+)""#).unwrap());

/// Substrings searched for in the raw page HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSet {
    pub version: &'static str,
    /// Any of these means the video does not exist or cannot be played.
    pub unavailable: &'static [&'static str],
    /// Any of these means a broadcast is in progress.
    pub live: &'static [&'static str],
}

pub const MARKERS_2024_01: MarkerSet = MarkerSet {
    version: "2024-01",
    unavailable: &["Video unavailable", r#""status":"ERROR""#],
    live: &[
        r#""isLiveContent":true"#,
        "BADGE_STYLE_TYPE_LIVE_NOW",
        r#""isLiveBroadcast":true"#,
        r#""isLive":true"#,
    ],
};

/// What a watch page says about its video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSignals {
    pub unavailable: bool,
    pub live: bool,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl PageSignals {
    pub fn title_or_default(&self) -> String {
        self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn author_or_default(&self) -> String {
        self.author.clone().unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
    }
}

pub trait SignalExtractor: Send + Sync {
    fn extract(&self, html: &str) -> PageSignals;
}

/// Substring/regex based extractor over a [`MarkerSet`].
#[derive(Debug, Clone, Copy)]
pub struct MarkerExtractor {
    markers: MarkerSet,
}

impl MarkerExtractor {
    pub fn new(markers: MarkerSet) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }
}

impl Default for MarkerExtractor {
    fn default() -> Self {
        Self::new(MARKERS_2024_01)
    }
}

impl SignalExtractor for MarkerExtractor {
    fn extract(&self, html: &str) -> PageSignals {
        let contains_any = |needles: &[&str]| needles.iter().any(|n| html.contains(n));

        PageSignals {
            unavailable: contains_any(self.markers.unavailable),
            live: contains_any(self.markers.live),
            title: extract_title(html),
            author: extract_author(html),
        }
    }
}

fn extract_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace(TITLE_SUFFIX, "").trim().to_string())
}

fn extract_author(html: &str) -> Option<String> {
    AUTHOR_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
