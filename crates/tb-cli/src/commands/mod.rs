//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod demo;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tb_core::config::BoardConfig;

/// Configuration file used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = ".threadboard/config.toml";

/// threadboard - threaded comment board
#[derive(Debug, Parser)]
#[command(name = "threadboard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "THREADBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a sample discussion and print it
    Demo(demo::DemoArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Dispatch to command handler
    match cli.command {
        Commands::Demo(args) => {
            let config = load_config(&config_path, cli.config.is_some())?;
            demo::execute(args, config)
        }
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

/// Load the board configuration. A missing default file means defaults; a
/// missing file that was asked for explicitly is an error.
pub fn load_config(path: &Path, explicit: bool) -> Result<BoardConfig> {
    if !path.exists() && !explicit {
        tracing::debug!("No configuration at {}, using defaults", path.display());
        return Ok(BoardConfig::default());
    }

    BoardConfig::load(path).context(format!("Failed to load configuration {}", path.display()))
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
