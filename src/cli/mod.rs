//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for edital-audit using clap.

pub mod commands;

use crate::config::{load_config, LoggingConfig};
use clap::{Parser, Subcommand};

/// edital-audit - encrypted audit trail for call registrations
#[derive(Parser, Debug)]
#[command(name = "edital-audit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "edital-audit.toml",
        env = "EDITAL_AUDIT_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "EDITAL_AUDIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level and sinks for the global subscriber
    ///
    /// `record`, `decrypt` and `migrate` take `[application] log_level` and
    /// `[logging]` from the configuration file, with `--log-level` taking
    /// precedence. Other commands, or a config that fails to load, log to the
    /// console at `info`; the command itself then reports the config error.
    pub fn logging_settings(&self) -> (String, LoggingConfig) {
        let config = match self.command {
            Commands::Record(_) | Commands::Decrypt(_) | Commands::Migrate(_) => {
                load_config(&self.config).ok()
            }
            _ => None,
        };

        match config {
            Some(config) => (
                self.log_level
                    .clone()
                    .unwrap_or(config.application.log_level),
                config.logging,
            ),
            None => (
                self.log_level.clone().unwrap_or_else(|| "info".to_string()),
                LoggingConfig::console_only(),
            ),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record one registration event read from a JSON file or stdin
    Record(commands::record::RecordArgs),

    /// Generate a new base64-encoded encryption key
    Keygen(commands::keygen::KeygenArgs),

    /// Decrypt a single stored field with the configured key
    Decrypt(commands::decrypt::DecryptArgs),

    /// Create the audit table on the configured store
    Migrate(commands::migrate::MigrateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
