//! PostgreSQL integration
//!
//! Stores audit records in the append-only `registration_audit_log` table.

pub mod client;
pub mod store;

pub use client::PostgreSQLClient;
pub use store::PostgresLogStore;
