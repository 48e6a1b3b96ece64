//! Configuration management for the audit service.
//!
//! # Overview
//!
//! Configuration is a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `EDITAL_AUDIT_*` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! The encryption key is mandatory. A missing or malformed key is a
//! configuration error and the service refuses to start; there is no
//! default key.
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "production"
//! store_target = "postgresql"
//!
//! [application]
//! log_level = "info"
//!
//! [audit]
//! encryption_key = "${EDITAL_AUDIT_KEY}"
//!
//! [postgresql]
//! connection_string = "postgresql://audit:${PG_PASSWORD}@db:5432/portal"
//! ssl_mode = "require"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/edital-audit"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use edital_audit::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("edital-audit.toml")?;
//! let key = config.audit.encryption_key()?;
//! println!("Store: {}, key fingerprint: {}", config.store_target, key.fingerprint());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    ApplicationConfig, AuditConfig, AuditServiceConfig, Environment, FileStoreConfig,
    LoggingConfig, PostgreSQLConfig, StoreTarget,
};
pub use secret::{secret_string, SecretString, SecretValue};
