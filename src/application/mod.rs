//! Application layer - Services built on the ports.

pub mod download_resolver;
pub mod session;
pub mod status_checker;

pub use download_resolver::DownloadResolver;
pub use session::Session;
pub use status_checker::{CheckError, StatusChecker};
