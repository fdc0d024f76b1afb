//! Domain errors for catalog fetches
//!
//! Data-source adapters convert whatever their client library raises into
//! one of these variants, so the home orchestration never sees transport
//! types.

use thiserror::Error;

/// Errors a catalog fetch can fail with
///
/// Every variant carries a human-readable message; the presenter only logs
/// these and shows its own user-facing text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The backend answered with a non-success status
    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// The request never got an answer (connection, timeout, TLS, ...)
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The answer could not be decoded into catalog entities
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A query that must yield one item yielded none
    #[error("Not found: {0}")]
    NotFound(String),

    /// The data source is misconfigured
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl FetchError {
    /// Create a backend error from a status code and message
    pub fn backend(status: u16, msg: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: msg.into(),
        }
    }

    /// Create a transport error with a message
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid response error with a message
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create a not found error with a message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a config error with a message
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Result type alias for catalog fetches
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error() {
        let err = FetchError::backend(503, "service unavailable");
        assert!(matches!(err, FetchError::Backend { status: 503, .. }));
        assert_eq!(err.to_string(), "Backend returned 503: service unavailable");
    }

    #[test]
    fn test_transport_error() {
        let err = FetchError::transport("network down");
        assert_eq!(err.to_string(), "Transport failure: network down");
    }

    #[test]
    fn test_not_found_error() {
        let err = FetchError::not_found("featured content");
        assert!(err.to_string().contains("featured content"));
    }
}
