//! Unified error handling for kitchen-core

use thiserror::Error;

/// Core error type for kitchen-core
#[derive(Error, Debug)]
pub enum Error {
    /// The network call itself did not complete (offline, DNS, timeout, abort)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Api { message: String, status: u16 },

    /// A success response claimed JSON but the body did not parse
    #[error("Invalid JSON response (HTTP {status}): {message}")]
    Decode { status: u16, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for kitchen-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an API error from a message and HTTP status
    pub fn api(message: impl Into<String>, status: u16) -> Self {
        Error::Api {
            message: message.into(),
            status,
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True for failures reported by the server, including undecodable success bodies
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. } | Error::Decode { .. })
    }

    /// True when the request never produced a response
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// HTTP status attached to the failure, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Transport("Request timed out".to_string())
        } else if err.is_connect() {
            Error::Transport(format!("Connection failed: {}", err))
        } else {
            Error::Transport(err.to_string())
        }
    }
}
