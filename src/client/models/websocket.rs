//! WebSocket auth frame models

use serde::{Deserialize, Serialize};

/// Auth frame sent once over the WebSocket
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    /// Session identifier from the login step
    pub cookie: String,

    #[serde(rename = "_method")]
    pub method: &'static str,

    #[serde(rename = "_reqid")]
    pub request_id: u32,
}

impl AuthRequest {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            cookie: session_id.into(),
            method: "auth",
            request_id: 1,
        }
    }
}

/// Reply to [`AuthRequest`]
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Missing counts as a rejection
    #[serde(default)]
    pub success: bool,
}
