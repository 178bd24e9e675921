//! Single-shot and forever-mode drivers for the keepalive cycle

use std::time::Duration;

use chrono::Utc;

use crate::client::IrcCloudApi;
use crate::config::{Config, Credentials};
use crate::error::Result;
use crate::keepalive::keep_alive;

/// Runs keepalive cycles against a client
pub struct Scheduler<C> {
    client: C,
    credentials: Credentials,
    interval: Duration,
}

impl<C: IrcCloudApi> Scheduler<C> {
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            client,
            credentials: config.credentials.clone(),
            interval: config.interval,
        }
    }

    /// Run a single cycle and hand its outcome to the caller
    pub async fn run_once(&self) -> Result<()> {
        keep_alive(&self.client, &self.credentials).await
    }

    /// Run cycles forever, sleeping a fixed interval after each one.
    ///
    /// Failures are logged and retried after the same interval as successes.
    /// This never returns.
    pub async fn run_forever(&self) {
        loop {
            self.tick().await;

            if let Ok(delay) = chrono::Duration::from_std(self.interval) {
                log::debug!("next keepalive at {}", (Utc::now() + delay).to_rfc3339());
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Run one cycle and log its outcome. Returns whether it succeeded.
    async fn tick(&self) -> bool {
        match self.run_once().await {
            Ok(()) => {
                log::info!("successfully kept connection alive");
                true
            }
            Err(e) => {
                log::warn!("keep alive error: {}", e);
                false
            }
        }
    }
}
