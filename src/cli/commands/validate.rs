//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the edital-audit configuration file.

use crate::adapters::postgresql::client::redact_connection_string;
use crate::config::{load_config, AuditServiceConfig, StoreTarget};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config runs validate() as its last step
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        let fingerprint = match config.audit.encryption_key() {
            Ok(key) => key.fingerprint(),
            Err(e) => {
                println!("❌ Encryption key rejected");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        for line in summary_lines(&config, &fingerprint) {
            println!("  {line}");
        }
        println!();
        Ok(0)
    }
}

fn summary_lines(config: &AuditServiceConfig, key_fingerprint: &str) -> Vec<String> {
    let mut lines = vec![
        format!("Environment: {:?}", config.environment),
        format!("Log Level: {}", config.application.log_level),
        format!("Key Fingerprint: {key_fingerprint}"),
        format!("Store Target: {}", config.store_target),
    ];

    match config.store_target {
        StoreTarget::PostgreSQL => {
            if let Some(ref pg_config) = config.postgresql {
                lines.push(format!(
                    "PostgreSQL Connection: {}",
                    redact_connection_string(pg_config.connection_string.expose_secret().as_ref())
                ));
                lines.push(format!("Max Connections: {}", pg_config.max_connections));
                lines.push(format!("SSL Mode: {}", pg_config.ssl_mode));
            }
        }
        StoreTarget::File => {
            if let Some(ref file_config) = config.file {
                lines.push(format!("Audit File: {}", file_config.path.display()));
            }
        }
    }

    if config.logging.local_enabled {
        lines.push(format!(
            "Local Logs: {} ({})",
            config.logging.local_path, config.logging.local_rotation
        ));
    } else {
        lines.push("Local Logs: disabled".to_string());
    }

    lines
}
