//! Client error type.

use crate::api::ApiError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Request could not be sent or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered 401. Stored credentials may have been cleared.
    #[error("Unauthorized: {path}")]
    Unauthorized { path: String },

    /// Any other non-2xx response.
    #[error("HTTP {status} from {path}: {message}")]
    Status {
        status: u16,
        path: String,
        message: String,
        /// Parsed error body, when the server sent one.
        error: Option<ApiError>,
    },

    /// A 2xx body that does not match the expected type.
    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status code, when the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Error code from the API error body, if any.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Status {
                error: Some(error), ..
            } => Some(error.code.as_str()),
            _ => None,
        }
    }
}
