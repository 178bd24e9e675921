//! IRCCloud wire models
//!
//! Request/response types exchanged during one keepalive cycle. None of them
//! outlive the cycle that produced them.

mod auth;
mod websocket;

pub use auth::{AuthToken, Session};
pub use websocket::{AuthRequest, AuthResponse};
