//! One keepalive cycle: form token, login, WebSocket auth

use crate::client::IrcCloudApi;
use crate::config::Credentials;
use crate::error::{AuthFailure, Result};

/// Progress through a keepalive cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FetchingToken,
    LoggingIn,
    Authenticating,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::FetchingToken => "fetching form token",
            Stage::LoggingIn => "logging in",
            Stage::Authenticating => "authenticating websocket",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(stage: Stage) {
    log::debug!("keepalive: {}", stage);
}

/// Run one keepalive cycle.
///
/// Each step only runs if the previous one reported `success`. The first
/// rejection or transport/decode error ends the cycle.
pub async fn keep_alive<C>(client: &C, credentials: &Credentials) -> Result<()>
where
    C: IrcCloudApi + ?Sized,
{
    enter(Stage::FetchingToken);
    let token = client.fetch_form_token().await?;
    if !token.success {
        return Err(AuthFailure::FormToken.into());
    }

    enter(Stage::LoggingIn);
    let session = client.login(credentials, &token.token).await?;
    if !session.success {
        return Err(AuthFailure::Login.into());
    }
    log::debug!(
        "logged in as uid {} (url {}, api {}), websocket {}{}",
        session.user_id,
        session.url,
        session.api_host,
        session.websocket_host,
        session.websocket_path
    );

    enter(Stage::Authenticating);
    if !client.authenticate_websocket(&session).await? {
        return Err(AuthFailure::WebSocket.into());
    }

    enter(Stage::Done);
    Ok(())
}
