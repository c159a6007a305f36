//! Ports - Trait definitions for everything outside the process.

pub mod api;
pub mod error;
pub mod metadata;
pub mod page;

pub use error::UpstreamError;
