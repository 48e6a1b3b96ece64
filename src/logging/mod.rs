//! Logging and observability
//!
//! Structured operational logging with `tracing`:
//! - Console output (human-readable or JSON)
//! - Local JSON file logging with rotation
//!
//! This is the diagnostic channel, not the audit trail. Audit records go to
//! the configured log store; this channel only ever sees record ids, action
//! kinds and errors, never plaintext identities.
//!
//! # Example
//!
//! ```no_run
//! use edital_audit::logging::init_logging;
//! use edital_audit::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Service started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a record accepted by the store
///
/// # Example
///
/// ```no_run
/// use edital_audit::log_audit_recorded;
/// use edital_audit::domain::ActionKind;
///
/// let id = uuid::Uuid::new_v4();
/// log_audit_recorded!(id, ActionKind::Registration, "postgresql");
/// ```
#[macro_export]
macro_rules! log_audit_recorded {
    ($record_id:expr, $action:expr, $store:expr) => {
        tracing::info!(
            record_id = %$record_id,
            action = %$action,
            store = $store,
            "Audit record persisted"
        );
    };
}

/// Log a record the store failed to persist
///
/// Emitted at `error` level: each occurrence is a gap in the audit trail.
///
/// # Example
///
/// ```no_run
/// use edital_audit::log_audit_store_failure;
/// use edital_audit::domain::{ActionKind, StoreError};
///
/// let id = uuid::Uuid::new_v4();
/// let err = StoreError::ConnectionFailed("timeout".to_string());
/// log_audit_store_failure!(id, ActionKind::CancelByUser, "postgresql", err);
/// ```
#[macro_export]
macro_rules! log_audit_store_failure {
    ($record_id:expr, $action:expr, $store:expr, $error:expr) => {
        tracing::error!(
            record_id = %$record_id,
            action = %$action,
            store = $store,
            error = %$error,
            "Failed to persist audit record; entry dropped"
        );
    };
}
