//! Custom error types for the gateway

use thiserror::Error;

/// Failures talking to the upstream translation provider
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Upstream answered with a non-2xx status
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// Connection could not be established or was dropped
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Upstream payload did not have the expected shape
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },
}

impl TranslationError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Only transport-level failures qualify; a status or payload error
    /// would repeat identically.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TranslationError::NetworkError { .. } | TranslationError::TimeoutError
        )
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TranslationError::TimeoutError
        } else if err.is_builder() {
            TranslationError::ConfigError {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TranslationError::InvalidResponseError {
                message: err.to_string(),
            }
        } else {
            TranslationError::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

/// Errors surfaced by the gateway to its callers
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Caller sent a request without the required fields
    #[error("{0}")]
    Validation(String),

    /// Anything that went wrong upstream; the detail is for logs only
    #[error("upstream translation failed: {0}")]
    Upstream(#[from] TranslationError),
}

/// Result type for upstream operations
pub type Result<T> = std::result::Result<T, TranslationError>;
