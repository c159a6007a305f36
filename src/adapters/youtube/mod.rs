//! YouTube outbound adapter.
//!
//! Implements `MetadataPort` (oEmbed) and `WatchPagePort` (watch page HTML)
//! over a single reqwest client.

mod client;
mod oembed;
mod watch_page;

pub use client::YouTubeClient;

/// oEmbed rejects anonymous agents less often when we look like a crawler.
const OEMBED_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

/// The watch page is fetched as a desktop browser would.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
