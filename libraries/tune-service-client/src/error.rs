//! Error types for the music service client.

use thiserror::Error;

/// Errors that can occur when talking to the music service.
#[derive(Error, Debug)]
pub enum ServiceClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid base URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Audio lookup succeeded but carried no usable URL
    #[error("No audio URL returned for {0}")]
    MissingAudioUrl(String),

    /// Service is offline or unreachable
    #[error("Service unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for service client operations.
pub type Result<T> = std::result::Result<T, ServiceClientError>;

impl From<ServiceClientError> for tune_core::CoreError {
    fn from(err: ServiceClientError) -> Self {
        Self::Resolution(err.to_string())
    }
}
