//! Audit logging
//!
//! Encrypt-then-append recording of registration and cancellation events.

pub mod logger;

pub use logger::{AuditLogger, RecordOutcome};
