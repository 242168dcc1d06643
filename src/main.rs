//! nonce-term: inspect, decode, and fingerprint sign-in identity tokens.
//!
//! Entry point for the application. Initializes logging, parses CLI
//! arguments, and delegates to the appropriate command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod display;
mod error;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Environment variable holding the log filter directive.
const LOG_ENV_VAR: &str = "NONCE_TERM_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber filtered by [`LOG_ENV_VAR`] (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse CLI arguments and dispatch to the appropriate command handler.
async fn run() -> Result<()> {
    let cli = Cli::parse();
    let no_color_env = std::env::var_os(cli::NO_COLOR_ENV);
    let use_color =
        !cli.color_disabled(no_color_env.as_deref()) && std::io::stdout().is_terminal();
    tracing::debug!(command = ?cli.command, use_color, "dispatching");

    match &cli.command {
        Commands::Show(args) => commands::show::execute(args, use_color),
        Commands::Decode(args) => commands::decode::execute(args, use_color),
        Commands::Shorten(args) => commands::shorten::execute(args).await,
        Commands::Digest(args) => commands::digest::execute(args).await,
    }
}
