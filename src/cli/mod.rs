//! Command-line definition

use clap::Parser;

/// Keep an IRCCloud session from expiring
///
/// Every flag can also be supplied through an `ICKA_`-prefixed environment
/// variable. Values given on the command line win.
#[derive(Parser, Debug)]
#[command(name = "irccloud-keepalive")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// IRCCloud account email
    #[arg(long, env = "ICKA_EMAIL", hide_env_values = true)]
    pub email: Option<String>,

    /// IRCCloud account password
    #[arg(long, env = "ICKA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Run forever, sleeping for one hour after each iteration
    #[arg(long, env = "ICKA_FOREVER")]
    pub forever: bool,

    /// Enable debug logging
    #[arg(long, env = "ICKA_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Custom service base URL for development/testing
    #[arg(long, env = "ICKA_API_HOST", hide = true)]
    pub api_host: Option<String>,
}
