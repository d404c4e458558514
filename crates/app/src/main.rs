//! ClubHub - CBIT clubs, events and recruitments
//!
//! Command-line front end over the persistent club directory.

use std::io::Write;

use clap::Parser;
use clubhub_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod state;

use cli::Cli;

fn main() {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> clubhub_core::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Configuration loaded");

    let app_state = state::AppState::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&app_state, cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}
