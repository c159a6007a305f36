//! Livewait - wait for a YouTube live stream to end, then hand out its link.
//!
//! Hexagonal Architecture:
//! - domain/: Pure logic (URL parsing, page signals, status and session types)
//! - ports/: Trait definitions for the upstreams and the checker API
//! - adapters/: Concrete implementations (YouTube over reqwest, axum HTTP, API client)
//! - application/: Status checker, download resolver and the polling session
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports for convenience
pub use application::{DownloadResolver, Session, StatusChecker};
pub use config::{AppConfig, NetworkFallback};
pub use domain::video::{extract_video_id, VideoId};
