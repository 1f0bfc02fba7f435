//! Error types for the bounce reconciler.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when interacting with the Sendinblue API.
#[derive(Error, Debug)]
pub enum SendinblueApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl SendinblueApiError {
    /// HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Unauthorized => Some(401),
            Self::RateLimitExceeded => Some(429),
            Self::HttpError(_) | Self::JsonError(_) | Self::Timeout => None,
        }
    }
}

/// Errors that end a reconciliation run.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// A list or unblock call failed
    #[error(transparent)]
    Api(#[from] SendinblueApiError),

    /// The provider still reported blocked contacts after the last allowed pass
    #[error("Blocked contacts still present after {passes} passes")]
    PassLimitReached { passes: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SendinblueApiError
pub type SendinblueApiResult<T> = Result<T, SendinblueApiError>;

/// Convenience type alias for Results with ReconcileError
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
