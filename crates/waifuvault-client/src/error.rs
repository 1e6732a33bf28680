//! Client error types

use serde::Deserialize;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Caller input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error returned by the service
    #[error("Error {status} ({name}): {message}")]
    Api {
        status: u16,
        name: String,
        message: String,
    },

    /// Non-success status whose body is not a structured error
    #[error("{body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The service refused the supplied file password
    #[error("password is incorrect")]
    IncorrectPassword,

    /// Success body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request payload could not be serialized
    #[error("Serialization error: {0}")]
    Encode(#[source] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body sent by the service on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    status: u16,
    name: String,
    message: String,
}

impl ClientError {
    /// Normalize a non-success response body.
    ///
    /// A body of the form `{status, name, message}` becomes [`ClientError::Api`];
    /// anything else is kept verbatim in [`ClientError::UnexpectedStatus`].
    pub fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) => Self::Api {
                status: err.status,
                name: err.name,
                message: err.message,
            },
            Err(_) => Self::UnexpectedStatus {
                status,
                body: body.to_string(),
            },
        }
    }

    /// Status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::IncorrectPassword => Some(403),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the service answered with a non-success status
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::UnexpectedStatus { .. })
    }

    /// Check if this is a rejected file password
    pub fn is_incorrect_password(&self) -> bool {
        matches!(self, Self::IncorrectPassword)
    }

    /// Check if the request was rejected locally
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
