//! External integrations for the audit log.
//!
//! - [`store`] - the [`store::LogStore`] trait and factory
//! - [`postgresql`] - PostgreSQL table implementation
//! - [`file`] - JSON Lines file implementation
//!
//! # Design Pattern
//!
//! Adapters isolate persistence behind a trait so the audit logger can be
//! tested with in-memory doubles.
//!
//! ```rust,no_run
//! use edital_audit::adapters::file::FileLogStore;
//! use edital_audit::adapters::store::LogStore;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store: Arc<dyn LogStore> = Arc::new(FileLogStore::new("/var/lib/edital-audit/log.jsonl")?);
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod postgresql;
pub mod store;
