//! Client error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from talking to the platform API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request could not be sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The platform answered with a non-success status.
    #[error("Tiendanube API error: {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}
