//! Core business logic.
//!
//! - [`audit`] - the [`audit::AuditLogger`] that turns registration events
//!   into encrypted, append-only audit records
//!
//! # Example
//!
//! ```rust,no_run
//! use edital_audit::config::load_config;
//! use edital_audit::core::audit::AuditLogger;
//! use edital_audit::domain::{ActionKind, Identity, RegistrationEvent};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("edital-audit.toml")?;
//! let logger = AuditLogger::from_config(&config)?;
//!
//! let registrant = Identity::new("user123", "12345678901", "João Silva");
//! let event = RegistrationEvent::self_service(ActionKind::Registration, registrant)
//!     .with_call_title("Edital Teste");
//!
//! let outcome = logger.record(event).await?;
//! println!("audit persisted: {}", outcome.is_persisted());
//! # Ok(())
//! # }
//! ```

pub mod audit;
