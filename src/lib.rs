// edital-audit - Encrypted audit trail for call registrations
// Copyright (c) 2025 edital-audit Contributors
// Licensed under the MIT License

//! # edital-audit - Encrypted Registration Audit Trail
//!
//! edital-audit records every registration and cancellation made against a
//! call for proposals ("edital") as an append-only, field-encrypted audit
//! entry.
//!
//! ## Overview
//!
//! For each event the library:
//! - **Validates** the action against the four known kinds
//! - **Encrypts** the six identity fields (subject and actor user id, CPF,
//!   name) independently with AES-256-GCM
//! - **Appends** the sealed record to a PostgreSQL table or a JSON Lines file
//!
//! Call metadata (title, code), the action and the timestamp stay in clear
//! so the trail can be filtered without the key.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The [`core::audit::AuditLogger`]
//! - [`crypto`] - Field cipher and key handling
//! - [`adapters`] - Log stores (PostgreSQL, file)
//! - [`domain`] - Events, records and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured operational logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edital_audit::config::load_config;
//! use edital_audit::core::audit::AuditLogger;
//! use edital_audit::domain::{ActionKind, Identity, RegistrationEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("edital-audit.toml")?;
//!     let logger = AuditLogger::from_config(&config)?;
//!
//!     let admin = Identity::new("admin1", "98765432100", "Maria Admin");
//!     let registrant = Identity::new("user123", "12345678901", "João Silva");
//!     let event = RegistrationEvent::new(ActionKind::CancelByAdmin, registrant, admin)
//!         .with_call_title("Edital 01/2024")
//!         .with_call_code("ED-2024-01");
//!
//!     // Store failures are logged and reported, not raised
//!     let outcome = logger.record(event).await?;
//!     println!("persisted: {}", outcome.is_persisted());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All library errors are [`domain::AuditError`]. Only an invalid action
//! kind or an encryption failure reach the caller of
//! [`core::audit::AuditLogger::record`]; a store failure becomes
//! [`core::audit::RecordOutcome::StoreFailed`].
//!
//! ## Logging
//!
//! Diagnostics use the `tracing` crate and carry record ids, actions and
//! errors only:
//!
//! ```rust,no_run
//! use edital_audit::log_audit_store_failure;
//! use edital_audit::domain::{ActionKind, StoreError};
//!
//! let id = uuid::Uuid::new_v4();
//! let err = StoreError::ConnectionFailed("pool timed out".to_string());
//! log_audit_store_failure!(id, ActionKind::Registration, "postgresql", err);
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod crypto;
pub mod domain;
pub mod logging;
