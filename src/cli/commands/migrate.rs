//! Migrate command implementation
//!
//! Connects to the configured store and creates the audit table if needed.

use crate::adapters::store::create_log_store;
use crate::config::load_config;
use clap::Args;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Running audit store migration");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let store = match create_log_store(&config) {
            Ok(s) => s,
            Err(e) => {
                println!("❌ Failed to create log store");
                println!("   Error: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        if let Err(e) = store.test_connection().await {
            println!("❌ Failed to connect to {} store", store.name());
            println!("   Error: {e}");
            return Ok(4);
        }

        match store.ensure_schema().await {
            Ok(()) => {
                println!("✅ Audit schema ready on {} store", store.name());
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, store = store.name(), "Migration failed");
                println!("❌ Migration failed");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}
