//! Mock IRCCloud client for testing
//!
//! Provides a scripted implementation of [`IrcCloudApi`] for unit testing
//! the keepalive cycle without any network traffic.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{AuthToken, IrcCloudApi, Session};
use crate::config::Credentials;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Every call pops the next scripted response for its endpoint and falls
/// back to an accepting response once the script runs out.
///
/// # Example
/// ```ignore
/// let mock = MockIrcCloudClient::new()
///     .with_token(AuthToken { token: String::new(), success: false })
///     .await;
///
/// assert!(keep_alive(&mock, &credentials).await.is_err());
/// ```
#[derive(Default)]
pub struct MockIrcCloudClient {
    /// Scripted responses for fetch_form_token
    tokens: Arc<Mutex<VecDeque<AuthToken>>>,
    /// Scripted responses for login
    sessions: Arc<Mutex<VecDeque<Session>>>,
    /// Scripted `success` flags for authenticate_websocket
    websocket_replies: Arc<Mutex<VecDeque<bool>>>,
    /// Errors to return, one per call, before any scripted response
    errors: Arc<Mutex<VecDeque<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub fetch_form_token: usize,
    pub login: usize,
    pub authenticate_websocket: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.fetch_form_token + self.login + self.authenticate_websocket
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedRequest {
    FetchFormToken,
    Login { email: String, token: String },
    AuthenticateWebSocket { session_id: String, host: String },
}

impl MockIrcCloudClient {
    /// Create a new mock client that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for fetch_form_token.
    pub async fn with_token(self, token: AuthToken) -> Self {
        self.tokens.lock().await.push_back(token);
        self
    }

    /// Queue a response for login.
    pub async fn with_session(self, session: Session) -> Self {
        self.sessions.lock().await.push_back(session);
        self
    }

    /// Queue a `success` flag for authenticate_websocket.
    pub async fn with_websocket_reply(self, success: bool) -> Self {
        self.websocket_replies.lock().await.push_back(success);
        self
    }

    /// Queue an error for the next API call, whichever endpoint it hits.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.errors.lock().await.push_back(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Pop the next queued error, if any.
    async fn check_error(&self) -> Result<()> {
        match self.errors.lock().await.pop_front() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    async fn capture(&self, request: CapturedRequest) {
        self.captured_requests.lock().await.push(request);
    }

    /// Session returned once the scripted ones are used up
    fn default_session() -> Session {
        Session {
            api_host: "https://api.mock.irccloud.test".to_string(),
            session_id: "mock-session".to_string(),
            success: true,
            user_id: 1,
            url: "https://www.mock.irccloud.test/".to_string(),
            websocket_host: "api.mock.irccloud.test".to_string(),
            websocket_path: "/websocket/1".to_string(),
            message: None,
        }
    }
}

#[async_trait]
impl IrcCloudApi for MockIrcCloudClient {
    async fn fetch_form_token(&self) -> Result<AuthToken> {
        self.call_count.lock().await.fetch_form_token += 1;
        self.capture(CapturedRequest::FetchFormToken).await;
        self.check_error().await?;

        let scripted = self.tokens.lock().await.pop_front();
        Ok(scripted.unwrap_or_else(|| AuthToken {
            token: "mock-form-token".to_string(),
            success: true,
        }))
    }

    async fn login(&self, credentials: &Credentials, token: &str) -> Result<Session> {
        self.call_count.lock().await.login += 1;
        self.capture(CapturedRequest::Login {
            email: credentials.email.clone(),
            token: token.to_string(),
        })
        .await;
        self.check_error().await?;

        let scripted = self.sessions.lock().await.pop_front();
        Ok(scripted.unwrap_or_else(Self::default_session))
    }

    async fn authenticate_websocket(&self, session: &Session) -> Result<bool> {
        self.call_count.lock().await.authenticate_websocket += 1;
        self.capture(CapturedRequest::AuthenticateWebSocket {
            session_id: session.session_id.clone(),
            host: session.websocket_host.clone(),
        })
        .await;
        self.check_error().await?;

        let scripted = self.websocket_replies.lock().await.pop_front();
        Ok(scripted.unwrap_or(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_defaults_accept() {
        let mock = MockIrcCloudClient::new();
        let credentials = Credentials {
            email: "a@b.c".to_string(),
            password: "x".to_string(),
        };

        let token = mock.fetch_form_token().await.unwrap();
        assert!(token.success);

        let session = mock.login(&credentials, &token.token).await.unwrap();
        assert!(session.success);

        assert!(mock.authenticate_websocket(&session).await.unwrap());
        assert_eq!(mock.call_counts().await.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockIrcCloudClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.fetch_form_token().await.is_err());
        assert!(mock.fetch_form_token().await.is_ok());
        assert_eq!(mock.call_counts().await.fetch_form_token, 2);
    }

    #[tokio::test]
    async fn test_mock_scripted_responses_run_out() {
        let mock = MockIrcCloudClient::new()
            .with_websocket_reply(false)
            .await;
        let session = MockIrcCloudClient::default_session();

        assert!(!mock.authenticate_websocket(&session).await.unwrap());
        assert!(mock.authenticate_websocket(&session).await.unwrap());
    }
}
