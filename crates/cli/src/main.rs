//! Mode CLI - Command-line interface for the Mode analytics REST API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute Mode REST API calls via the shared client library.
//! - Print results as pretty JSON on stdout; logs go to stderr.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - The client is always closed before exit, so a batch signature token never outlives the process.

mod args;
mod dispatch;
mod error;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use mode_client::ModeClient;
use mode_config::{Config, ConfigLoader};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let batch = cli.needs_batch_session();
    debug!(
        host = %config.connection.host,
        workspace = %config.auth.workspace,
        batch,
        "Connecting to Mode"
    );

    let client = ModeClient::builder()
        .from_config(&config)
        .batch(batch)
        .connect()
        .await
        .context("Failed to connect to Mode")?;

    let outcome = run_command(&client, cli.command).await;
    let closed = client.close().await;

    outcome?;
    closed.context("Failed to close the Mode client")
}

/// Build configuration: environment first, then CLI flags (highest priority).
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    // Blank values are ignored to allow fallback to env var
    if let Some(host) = non_blank(&cli.host) {
        loader = loader.with_host(host);
    }
    if let Some(workspace) = non_blank(&cli.workspace) {
        loader = loader.with_workspace(workspace);
    }
    if let Some(token) = non_blank(&cli.token) {
        loader = loader.with_token(token);
    }
    if let Some(password) = non_blank(&cli.password) {
        loader = loader.with_password(password);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(limit) = cli.max_connections {
        loader = loader.with_max_connections(limit);
    }

    loader.build().context("Failed to build configuration")
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
