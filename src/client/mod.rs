//! IRCCloud service client

use async_trait::async_trait;

use crate::config::Credentials;
use crate::error::Result;

pub mod irccloud;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod websocket;

pub use irccloud::IrcCloudClient;
#[cfg(test)]
pub use mock::MockIrcCloudClient;
pub use models::{AuthToken, Session};

/// Browser User-Agent sent on every request; the service refuses unknown agents
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.141 Safari/537.36";

/// Origin expected on the WebSocket upgrade
pub const IRCCLOUD_ORIGIN: &str = "https://www.irccloud.com";

/// The three round-trips of a keepalive cycle.
///
/// Each call reports the service's verdict through the returned `success`
/// flag. Only transport and decode failures come back as `Err`.
#[async_trait]
pub trait IrcCloudApi: Send + Sync {
    /// Fetch a one-shot form token for the login request
    async fn fetch_form_token(&self) -> Result<AuthToken>;

    /// Log in with the account credentials and a fresh form token
    async fn login(&self, credentials: &Credentials, token: &str) -> Result<Session>;

    /// Open the session's WebSocket, send the auth frame and return the
    /// reply's `success` flag. The connection is closed before returning.
    async fn authenticate_websocket(&self, session: &Session) -> Result<bool>;
}
