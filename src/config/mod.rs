//! Runtime configuration for the keepalive

use std::time::Duration;

use crate::cli::Cli;
use crate::error::{ConfigError, Result};

/// IRCCloud base URL
pub const DEFAULT_API_HOST: &str = "https://www.irccloud.com";

/// Delay between iterations in forever mode
pub const KEEPALIVE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Account credentials submitted to the login endpoint
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,

    /// Repeat the keepalive every [`KEEPALIVE_INTERVAL`] instead of running once
    pub forever: bool,

    /// Service base URL, without a trailing slash
    pub api_host: String,

    pub interval: Duration,
}

impl Config {
    /// Build the configuration from parsed CLI/env values.
    ///
    /// Empty strings count as missing, so `ICKA_EMAIL=` does not satisfy the
    /// requirement.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let email = non_empty(cli.email.as_deref()).ok_or(ConfigError::MissingEmail)?;
        let password = non_empty(cli.password.as_deref()).ok_or(ConfigError::MissingPassword)?;

        let api_host = match non_empty(cli.api_host.as_deref()) {
            Some(host) => validate_api_host(&host)?,
            None => DEFAULT_API_HOST.to_string(),
        };

        Ok(Self {
            credentials: Credentials { email, password },
            forever: cli.forever,
            api_host,
            interval: KEEPALIVE_INTERVAL,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn validate_api_host(host: &str) -> Result<String> {
    if !(host.starts_with("https://") || host.starts_with("http://")) {
        return Err(ConfigError::InvalidApiHost(format!(
            "{} (expected an http:// or https:// URL)",
            host
        ))
        .into());
    }
    Ok(host.trim_end_matches('/').to_string())
}
