//! Configuration loaded from the environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("NETWORK_FALLBACK must be `assume-live` or `report-failure`, got {0:?}")]
    InvalidFallback(String),
}

/// What the status checker reports when the watch page cannot be reached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NetworkFallback {
    /// Report the video as valid and live so a polling client keeps polling.
    #[default]
    AssumeLive,
    /// Fail the check with an explicit error.
    ReportFailure,
}

impl FromStr for NetworkFallback {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assume-live" | "assume_live" => Ok(NetworkFallback::AssumeLive),
            "report-failure" | "report_failure" => Ok(NetworkFallback::ReportFailure),
            _ => Err(ConfigError::InvalidFallback(s.to_string())),
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// oEmbed endpoint queried first
    pub oembed_endpoint: String,
    /// Host serving the public watch pages
    pub watch_base_url: String,
    /// Timeout applied to every outbound request
    pub http_timeout: Duration,
    pub network_fallback: NetworkFallback,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: String::from("127.0.0.1"),
            port: String::from("3000"),
            oembed_endpoint: String::from("https://www.youtube.com/oembed"),
            watch_base_url: String::from("https://www.youtube.com"),
            http_timeout: Duration::from_secs(10),
            network_fallback: NetworkFallback::AssumeLive,
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(value.trim().parse().map_err(|_| {
                ConfigError::InvalidNumber {
                    name: "HTTP_TIMEOUT_SECS",
                    value,
                }
            })?),
            None => defaults.http_timeout,
        };

        let network_fallback = match lookup("NETWORK_FALLBACK") {
            Some(value) => value.parse()?,
            None => defaults.network_fallback,
        };

        Ok(Self {
            addr: lookup("ADDR").unwrap_or(defaults.addr),
            port: lookup("PORT").unwrap_or(defaults.port),
            oembed_endpoint: lookup("OEMBED_ENDPOINT").unwrap_or(defaults.oembed_endpoint),
            watch_base_url: lookup("WATCH_BASE_URL").unwrap_or(defaults.watch_base_url),
            http_timeout,
            network_fallback,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

/// Client-side polling cadence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollSettings {
    /// Delay between live re-checks
    pub interval: Duration,
    /// Pause before asking for the download link
    pub processing_delay: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            processing_delay: Duration::from_secs(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.oembed_endpoint, "https://www.youtube.com/oembed");
        assert_eq!(config.watch_base_url, "https://www.youtube.com");
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.network_fallback, NetworkFallback::AssumeLive);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ADDR", "0.0.0.0"),
            ("PORT", "8080"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("NETWORK_FALLBACK", "report-failure"),
            ("WATCH_BASE_URL", "http://localhost:9000"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.network_fallback, NetworkFallback::ReportFailure);
        assert_eq!(config.watch_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("HTTP_TIMEOUT_SECS", "soon")])).unwrap_err(),
            ConfigError::InvalidNumber {
                name: "HTTP_TIMEOUT_SECS",
                value: "soon".to_string()
            }
        );
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("NETWORK_FALLBACK", "maybe")])),
            Err(ConfigError::InvalidFallback(_))
        ));
    }

    #[test]
    fn test_poll_defaults() {
        let settings = PollSettings::default();
        assert_eq!(settings.interval, Duration::from_secs(5));
        assert_eq!(settings.processing_delay, Duration::from_secs(2));
    }
}
