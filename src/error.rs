//! Error types for ConnectWise API operations.

use thiserror::Error;

/// Errors that can occur during ConnectWise API operations.
#[derive(Debug, Error)]
pub enum ConnectWiseError {
    /// Configuration is missing or incomplete.
    #[error("ConnectWise configuration required: {0}")]
    ConfigMissing(String),

    /// Page index or page size out of range.
    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    /// Extra parameters tried to set a key owned by the paginator.
    #[error("Parameter '{0}' is reserved for pagination")]
    ReservedParameter(String),

    /// The endpoint does not support the requested verb.
    #[error("{operation} is not supported on '{path}'")]
    UnsupportedOperation {
        operation: &'static str,
        path: String,
    },

    /// The service answered with a non-success status code.
    #[error("ConnectWise API error ({status_code}): {body}")]
    RequestError { status_code: u16, body: String },

    /// The response body did not match the expected record shape.
    #[error("Failed to parse response: {detail}")]
    DeserializationError { detail: String },

    /// Connection failure, timeout, or other transport problem.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failed to encode a value as JSON.
    #[error("Failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl ConnectWiseError {
    /// HTTP status code carried by the error, if the service produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestError { status_code, .. } => Some(*status_code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was raised before any request was sent.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPageRequest(_)
                | Self::ReservedParameter(_)
                | Self::UnsupportedOperation { .. }
        )
    }
}

/// Result type alias for ConnectWise operations.
pub type Result<T> = core::result::Result<T, ConnectWiseError>;
