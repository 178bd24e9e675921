//! One-shot WebSocket session authentication
//!
//! Opens the session's WebSocket, sends a single auth frame, waits for one
//! reply and closes the connection with a normal-closure frame. There is no
//! read timeout: the reply is awaited for as long as the server keeps the
//! connection open.

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{
    client::IntoClientRequest,
    http::{
        Request,
        header::{HOST, HeaderValue, ORIGIN, USER_AGENT},
    },
    protocol::{CloseFrame, Message, frame::coding::CloseCode},
};
use tokio_tungstenite::{MaybeTlsStream, connect_async};

use super::models::{AuthRequest, AuthResponse};
use super::{BROWSER_USER_AGENT, IRCCLOUD_ORIGIN};
use crate::error::{ApiError, Result};

type WebSocketStream = tokio_tungstenite::WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Where to connect for the auth exchange
#[derive(Debug, Clone)]
pub struct WebSocketTarget {
    /// `wss`, or `ws` against local servers
    pub scheme: &'static str,
    pub host: String,
    pub path: String,
}

impl WebSocketTarget {
    /// Full URL, with archived buffers excluded from the initial backlog
    pub fn url(&self) -> String {
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!(
            "{}://{}{}{}exclude_archives=1",
            self.scheme, self.host, self.path, separator
        )
    }
}

/// Build the upgrade request with the headers the service checks
fn build_request(target: &WebSocketTarget) -> Result<Request<()>> {
    let mut request = target.url().into_client_request().map_err(ApiError::from)?;

    let host = HeaderValue::from_str(&target.host).map_err(|e| {
        ApiError::InvalidResponse(format!("Invalid websocket host {:?}: {}", target.host, e))
    })?;

    let headers = request.headers_mut();
    headers.insert(HOST, host);
    headers.insert(ORIGIN, HeaderValue::from_static(IRCCLOUD_ORIGIN));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

    Ok(request)
}

/// Authenticate `session_id` over a fresh connection and return the reply's
/// `success` flag.
///
/// Once connected, a normal-closure frame is sent on every path. An error
/// from the exchange takes precedence over an error while closing.
pub async fn authenticate(target: &WebSocketTarget, session_id: &str) -> Result<bool> {
    let request = build_request(target)?;
    let (mut ws_stream, _) = connect_async(request).await.map_err(ApiError::from)?;
    log::debug!("WebSocket handshake with {} completed", target.host);

    let exchanged = exchange(&mut ws_stream, &AuthRequest::new(session_id)).await;

    let closed = ws_stream
        .close(Some(CloseFrame {
            code: CloseCode::Normal,
            reason: "".into(),
        }))
        .await;

    let reply = exchanged?;
    closed.map_err(ApiError::from)?;

    Ok(reply.success)
}

/// Send the auth frame and read exactly one data frame back
async fn exchange(
    ws_stream: &mut WebSocketStream,
    request: &AuthRequest,
) -> Result<AuthResponse> {
    let payload = serde_json::to_string(request)?;
    ws_stream
        .send(Message::Text(payload.into()))
        .await
        .map_err(ApiError::from)?;

    loop {
        let reply: serde_json::Result<AuthResponse> = match ws_stream.next().await {
            Some(Ok(Message::Text(text))) => serde_json::from_str(&text),
            Some(Ok(Message::Binary(data))) => serde_json::from_slice(&data),
            Some(Ok(Message::Close(_))) | None => {
                return Err(ApiError::Network(
                    "websocket closed before the auth reply".to_string(),
                )
                .into());
            }
            // Ping/Pong are answered by tungstenite itself.
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(ApiError::from(e).into()),
        };

        return reply.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse auth response: {}", e)).into()
        });
    }
}
