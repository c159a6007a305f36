//! Adapters - Concrete implementations of ports.

pub mod api_client;
pub mod http;
pub mod youtube;
