//! Client error types.

/// Result type for PayWhirl client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the PayWhirl client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Invalid configuration (missing credentials, bad base URL).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("decode error: {source}")]
    Decode {
        /// Raw response body.
        body: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Request parameters could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
