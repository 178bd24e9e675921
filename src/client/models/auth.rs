//! Login handshake models

use serde::Deserialize;

/// Form token returned by `/chat/auth-formtoken`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    /// Anti-forgery token to submit alongside the credentials
    #[serde(default)]
    pub token: String,

    /// Missing counts as a rejection
    #[serde(default)]
    pub success: bool,
}

/// Session returned by `/chat/login`
///
/// A rejected login only carries `success` and `message`, so everything else
/// falls back to its default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub api_host: String,

    /// Session identifier, sent as the `cookie` of the WebSocket auth request
    #[serde(default, rename = "session")]
    pub session_id: String,

    #[serde(default)]
    pub success: bool,

    #[serde(default, rename = "uid")]
    pub user_id: u64,

    #[serde(default)]
    pub url: String,

    /// WebSocket host, e.g. `api-3.irccloud.com`
    #[serde(default)]
    pub websocket_host: String,

    /// WebSocket path, e.g. `/websocket/3`
    #[serde(default)]
    pub websocket_path: String,

    /// Rejection reason reported by the service
    #[serde(default)]
    pub message: Option<String>,
}
