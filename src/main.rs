//! Livewait server.
//!
//! Wires up:
//! - YouTube outbound adapter (oEmbed + watch page)
//! - Status checker with the configured network fallback
//! - HTTP inbound adapter (check/download endpoints and the form page)

use livewait::adapters::http::{router, AppState};
use livewait::adapters::youtube::YouTubeClient;
use livewait::{AppConfig, StatusChecker};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("livewait=info,tower_http=info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 1. Adapters
    let youtube = match YouTubeClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to initialize YouTube client: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Application Services
    let checker = StatusChecker::new(youtube.clone(), youtube, config.network_fallback);
    tracing::info!(fallback = ?checker.fallback(), "Status checker ready");

    // 3. HTTP Layer
    let app = router(AppState::new(checker));

    // 4. Start Server
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind TCP listener");
    tracing::info!("Listening at {}", config.bind_addr());
    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
