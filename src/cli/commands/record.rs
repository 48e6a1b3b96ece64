//! Record command implementation
//!
//! Reads one registration event as JSON (the flat camelCase shape the
//! portal handlers send) and pushes it through the configured audit logger.

use crate::config::load_config;
use crate::core::audit::{AuditLogger, RecordOutcome};
use crate::domain::{AuditError, RegistrationEvent};
use anyhow::Context;
use clap::Args;
use tokio::io::AsyncReadExt;

/// Arguments for the record command
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Path to the event JSON file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<String>,
}

impl RecordArgs {
    /// Execute the record command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let raw = self.read_input().await?;
        let event = match parse_event(&raw) {
            Ok(event) => event,
            Err(e) => {
                println!("❌ Invalid event payload");
                println!("   Error: {e}");
                return Ok(3); // Invalid input exit code
            }
        };

        let logger = match AuditLogger::from_config(&config) {
            Ok(l) => l,
            Err(e) => {
                println!("❌ Failed to initialize audit logger");
                println!("   Error: {e}");
                return Ok(error_exit_code(&e));
            }
        };

        match logger.record(event).await {
            Ok(outcome) => {
                report_outcome(&outcome);
                Ok(outcome_exit_code(&outcome))
            }
            Err(e) => {
                println!("❌ Audit record rejected");
                println!("   Error: {e}");
                Ok(error_exit_code(&e))
            }
        }
    }

    async fn read_input(&self) -> anyhow::Result<String> {
        match self.input {
            Some(ref path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read event file {path}")),
            None => {
                let mut buf = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buf)
                    .await
                    .context("Failed to read event from stdin")?;
                Ok(buf)
            }
        }
    }
}

fn parse_event(raw: &str) -> Result<RegistrationEvent, serde_json::Error> {
    serde_json::from_str(raw.trim())
}

fn report_outcome(outcome: &RecordOutcome) {
    match outcome {
        RecordOutcome::Persisted { id } => println!("✅ Audit record persisted: {id}"),
        RecordOutcome::StoreFailed { id } => {
            println!("⚠️  Audit record {id} was built but not persisted (see logs)")
        }
        RecordOutcome::Rejected => println!("❌ Audit record rejected"),
    }
}

fn outcome_exit_code(outcome: &RecordOutcome) -> i32 {
    match outcome {
        RecordOutcome::Persisted { .. } => 0,
        RecordOutcome::StoreFailed { .. } => 4,
        RecordOutcome::Rejected => 3,
    }
}

fn error_exit_code(error: &AuditError) -> i32 {
    match error {
        AuditError::Configuration(_) => 2,
        AuditError::InvalidActionKind(_) | AuditError::Validation(_) => 3,
        AuditError::Store(_) => 4,
        _ => 5,
    }
}
