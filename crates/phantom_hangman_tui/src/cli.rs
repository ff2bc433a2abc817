//! Command-line interface for phantom_hangman.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Phantom Hangman - guess the secret word before the figure is complete
#[derive(Parser, Debug)]
#[command(name = "phantom_hangman")]
#[command(about = "Terminal hangman for two players at one keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// File to write logs to
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Echo the password while it is typed
    #[arg(long, global = true)]
    pub show_password: bool,

    /// Input poll interval in milliseconds
    #[arg(long, global = true)]
    pub tick_rate_ms: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    #[default]
    Play,

    /// Check whether a word is an acceptable password
    Check {
        /// Word to check
        password: String,
    },
}
