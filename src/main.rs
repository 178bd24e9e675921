//! irccloud-keepalive - keeps an IRCCloud session from expiring

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod keepalive;
mod scheduler;

use cli::Cli;
use client::IrcCloudClient;
use config::Config;
use error::Result;
use scheduler::Scheduler;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `info` by default so forever-mode outcomes show up; `RUST_LOG` wins.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    log::debug!("Using {:?}", config);

    let client = IrcCloudClient::new(config.api_host.clone())?;
    let scheduler = Scheduler::new(client, &config);

    if config.forever {
        scheduler.run_forever().await;
        Ok(())
    } else {
        scheduler.run_once().await
    }
}
