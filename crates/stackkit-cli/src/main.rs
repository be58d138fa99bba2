mod cli;
mod commands;
mod error;
mod output;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stackkit_api::{StackClient, TransportConfig};

use crate::cli::{Cli, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = build_client(&cli.global)?;

    tracing::debug!(command = ?cli.command, "dispatching command");
    commands::dispatch(cli.command, &client, &cli.global).await
}

/// Build a `StackClient` from CLI flags / env vars.
fn build_client(global: &GlobalOpts) -> Result<StackClient, CliError> {
    let transport = TransportConfig {
        timeout: Duration::from_secs(global.timeout),
        api_key: global.key.clone(),
    };

    match global.api_url.as_deref() {
        Some(raw) => {
            let url: url::Url = raw.parse().map_err(|_| CliError::Validation {
                field: "api-url".into(),
                reason: format!("invalid URL: {raw}"),
            })?;
            StackClient::with_base_url(url, &transport).map_err(CliError::Api)
        }
        None => StackClient::new(&transport).map_err(CliError::Api),
    }
}
