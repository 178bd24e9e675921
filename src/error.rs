//! Error types for irccloud-keepalive

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Result type alias for keepalive operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while talking to the IRCCloud service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Rejected(AuthFailure),
}

/// A well-formed response in which the service refused the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// The form token endpoint answered `success: false`
    FormToken,
    /// The login endpoint rejected the credentials
    Login,
    /// The WebSocket auth reply answered `success: false`
    WebSocket,
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            AuthFailure::FormToken => "get auth token failed",
            AuthFailure::Login => "get session failed, check email and password",
            AuthFailure::WebSocket => "auth websocket request failed",
        };
        f.write_str(msg)
    }
}

impl From<AuthFailure> for Error {
    fn from(failure: AuthFailure) -> Self {
        Error::Api(ApiError::Rejected(failure))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<tungstenite::Error> for ApiError {
    fn from(err: tungstenite::Error) -> Self {
        ApiError::Network(format!("websocket: {}", err))
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--email is required")]
    MissingEmail,

    #[error("--password is required")]
    MissingPassword,

    #[error("Invalid API host: {0}")]
    InvalidApiHost(String),
}
