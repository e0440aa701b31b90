use thiserror::Error;

/// Errors returned by the TempMailChecker client.
///
/// Failures are never retried or logged by the client; each one is the final
/// outcome of the call that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// The client was set up with an empty or unusable API key, or a bad proxy.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Caller input was rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// Connection, TLS or timeout failure reported by the HTTP transport.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered `429 Too Many Requests`.
    #[error("Rate limit exceeded: {message}")]
    RateLimited {
        /// Message supplied by the service, or `Daily limit reached`.
        message: String,
    },

    /// The service answered with a non-200 status other than 429.
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message supplied by the service, or `API request failed`.
        message: String,
    },

    /// A successful response carried a body that could not be decoded.
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` if the service rejected the call because the quota is spent.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// HTTP status code attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RateLimited { .. } => Some(429),
            Error::Api { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
