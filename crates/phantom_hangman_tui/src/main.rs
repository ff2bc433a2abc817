//! Phantom Hangman - terminal front end.
//!
//! Collects the secret word, shows the letter rack and the hangman figure,
//! and offers a new game or quitting once a round ends. All game rules live
//! in the `phantom_hangman` crate.

#![warn(missing_docs)]

mod cli;
mod config;
mod tui;

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use phantom_hangman::{ValidationError, validate_password};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    init_logging(&config)?;

    match cli.command.clone().unwrap_or_default() {
        Command::Play => tui::run(&config),
        Command::Check { password } => check_password(&password),
    }
}

/// Sends tracing output to the configured log file so it never draws over
/// the terminal UI.
fn init_logging(config: &TuiConfig) -> Result<()> {
    let log_file = File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Validates `password` with the same rule the game uses.
#[instrument(skip(password), fields(len = password.len()))]
fn check_password(password: &str) -> Result<()> {
    match validate_password(password) {
        Ok(()) => {
            info!("Password accepted");
            println!("{:?} is a valid password", password);
            Ok(())
        }
        Err(reason) => {
            info!(%reason, "Password rejected");
            anyhow::bail!("{}. {}", reason, ValidationError::HINT)
        }
    }
}
