use thiserror::Error;

/// Failure talking to an upstream endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Unreachable(String),

    /// A response arrived with a non-2xx status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// A 2xx response whose body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            UpstreamError::Status(status.as_u16())
        } else {
            UpstreamError::Unreachable(err.to_string())
        }
    }
}
