//! Domain models and types for the audit log.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Action kinds** ([`ActionKind`]) - the closed set of audited actions
//! - **Caller input** ([`RegistrationEvent`], [`Identity`])
//! - **Stored output** ([`EncryptedActionRecord`], [`CipherText`])
//! - **Error types** ([`AuditError`], [`CipherError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use edital_audit::domain::{ActionKind, Identity, RegistrationEvent};
//!
//! let registrant = Identity::new("user123", "12345678901", "João Silva");
//! let event = RegistrationEvent::self_service(ActionKind::Registration, registrant)
//!     .with_call_title("Edital Teste")
//!     .with_call_code("ED-2024-07");
//!
//! assert_eq!(event.action, "REGISTRATION");
//! ```

pub mod action;
pub mod errors;
pub mod event;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use action::ActionKind;
pub use errors::{AuditError, CipherError, StoreError};
pub use event::{Identity, RegistrationEvent, RegistrationEventBuilder};
pub use record::{CipherText, EncryptedActionRecord, EncryptedIdentity};
pub use result::Result;
