//! Domain layer - Pure business logic.

// URL parsing and the identifier type
pub mod video;

// Watch-page scraping markers
pub mod signals;

// Check/download result types exchanged over HTTP
pub mod status;

// Client-side session state
pub mod session;
