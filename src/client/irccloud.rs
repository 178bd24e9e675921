//! IRCCloud client implementation

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;

use super::websocket::{self, WebSocketTarget};
use super::{AuthToken, BROWSER_USER_AGENT, IrcCloudApi, Session};
use crate::config::Credentials;
use crate::error::{ApiError, Result};

/// IRCCloud HTTP + WebSocket client
pub struct IrcCloudClient {
    http: HttpClient,
    base_url: String,
}

impl IrcCloudClient {
    /// Create a client for the given service base URL.
    ///
    /// No request timeout is set; a slow service is waited on.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// `ws` for plain-HTTP base URLs (local test servers), `wss` otherwise
    fn websocket_scheme(&self) -> &'static str {
        if self.base_url.starts_with("http://") {
            "ws"
        } else {
            "wss"
        }
    }

    /// Send a request and decode its JSON body.
    ///
    /// The status code is not checked: the service reports rejections in the
    /// body's `success` flag.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T> {
        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        let body = response.text().await.map_err(ApiError::from)?;

        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "Failed to parse {} response (HTTP {}): {}",
                what, status, e
            ))
            .into()
        })
    }
}

#[async_trait]
impl IrcCloudApi for IrcCloudClient {
    async fn fetch_form_token(&self) -> Result<AuthToken> {
        let url = format!("{}/chat/auth-formtoken", self.base_url);
        self.send_json(self.http.post(&url), "auth-formtoken").await
    }

    async fn login(&self, credentials: &Credentials, token: &str) -> Result<Session> {
        let url = format!("{}/chat/login", self.base_url);

        let form = [
            ("email", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
            ("token", token),
        ];
        let request = self
            .http
            .post(&url)
            .header("X-Auth-FormToken", token)
            .form(&form);

        let session: Session = self.send_json(request, "login").await?;
        if !session.success {
            if let Some(ref message) = session.message {
                log::debug!("Login rejected: {}", message);
            }
        }
        Ok(session)
    }

    async fn authenticate_websocket(&self, session: &Session) -> Result<bool> {
        if session.websocket_host.is_empty() {
            return Err(ApiError::InvalidResponse(
                "login response has no websocket_host".to_string(),
            )
            .into());
        }

        let target = WebSocketTarget {
            scheme: self.websocket_scheme(),
            host: session.websocket_host.clone(),
            path: session.websocket_path.clone(),
        };
        websocket::authenticate(&target, &session.session_id).await
    }
}
