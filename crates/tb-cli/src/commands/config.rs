//! Config command
//!
//! Manage threadboard configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;
use tb_core::config::BoardConfig;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
        ConfigCommand::Validate => validate_config(config_path),
    }
}

fn show_config(config_path: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let (config, source) = if config_path.exists() {
        let config = BoardConfig::load(config_path)?;
        (config, config_path.display().to_string())
    } else {
        (BoardConfig::default(), "built-in defaults".to_string())
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", "Configuration:".bold().underline());
        println!("{}", source.dimmed());
        println!();
        print!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let content = format!(
        "# threadboard configuration\n\n{}",
        BoardConfig::default().to_toml_string()?
    );

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(config_path, content)
        .context(format!("Failed to write {}", config_path.display()))?;

    println!(
        "{} Wrote default configuration to {}",
        "✓".green(),
        config_path.display()
    );

    Ok(())
}

fn validate_config(config_path: &Path) -> Result<()> {
    use colored::Colorize;

    if !config_path.exists() {
        anyhow::bail!("Configuration not found at {}", config_path.display());
    }

    let content = fs::read_to_string(config_path)?;
    let raw: toml::Value = toml::from_str(&content)
        .context(format!("{} is not valid TOML", config_path.display()))?;
    BoardConfig::from_toml_str(&content)?;

    println!("{} Configuration is valid", "✓".green());

    for section in ["limits", "display"] {
        if raw.get(section).is_none() {
            println!("{} [{}] section not found, using defaults", "⚠".yellow(), section);
        }
    }

    Ok(())
}
