//! Audit logger for registration-affecting actions
//!
//! [`AuditLogger::record`] validates the action kind, encrypts the six
//! identity fields one by one, seals an [`EncryptedActionRecord`] and hands
//! it to the configured [`LogStore`].
//!
//! # Failure policy
//!
//! `record` is best-effort with respect to persistence only:
//!
//! | Step | Failure | Returned to caller |
//! |------|---------|--------------------|
//! | action validation | [`AuditError::InvalidActionKind`] | `Err` |
//! | field encryption | [`AuditError::Encryption`] | `Err` |
//! | store insert | [`StoreError`](crate::domain::StoreError) | `Ok(RecordOutcome::StoreFailed)` + `error!` log |
//!
//! A lost audit entry is preferred over blocking the user-facing action.
//! Handlers that must never fail on auditing use
//! [`AuditLogger::record_best_effort`], which also turns the first two rows
//! into a logged diagnostic.

use crate::adapters::store::{create_log_store, LogStore};
use crate::config::AuditServiceConfig;
use crate::crypto::{AesGcmFieldCipher, FieldCipher};
use crate::domain::{
    ActionKind, AuditError, CipherError, EncryptedActionRecord, EncryptedIdentity, Identity,
    RegistrationEvent, Result,
};
use crate::{log_audit_recorded, log_audit_store_failure};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// What happened to one audit attempt that did not return an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The record was accepted by the store
    Persisted { id: Uuid },
    /// The record was built but the store rejected it; the failure was logged
    StoreFailed { id: Uuid },
    /// The event was rejected before reaching the store (only produced by
    /// [`AuditLogger::record_best_effort`])
    Rejected,
}

impl RecordOutcome {
    /// Returns true if the record reached the store
    pub fn is_persisted(&self) -> bool {
        matches!(self, RecordOutcome::Persisted { .. })
    }

    /// Id of the sealed record, if one was built
    pub fn record_id(&self) -> Option<Uuid> {
        match self {
            RecordOutcome::Persisted { id } | RecordOutcome::StoreFailed { id } => Some(*id),
            RecordOutcome::Rejected => None,
        }
    }
}

/// Encrypts and persists audit records
///
/// Stateless between calls and safe to share behind an `Arc` across
/// concurrent requests: the cipher is read-only after construction and the
/// store serializes its own writes.
pub struct AuditLogger {
    cipher: Arc<dyn FieldCipher>,
    store: Arc<dyn LogStore>,
}

impl AuditLogger {
    /// Create a logger from an explicit cipher and store
    pub fn new(cipher: Arc<dyn FieldCipher>, store: Arc<dyn LogStore>) -> Self {
        Self { cipher, store }
    }

    /// Create a logger from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Configuration`] if the encryption key is
    /// missing or unusable, or an error from the store factory. Callers
    /// should treat any error here as fatal.
    pub fn from_config(config: &AuditServiceConfig) -> Result<Self> {
        let key = config.audit.encryption_key()?;
        let cipher = AesGcmFieldCipher::new(&key).map_err(|e| {
            AuditError::Configuration(format!("audit.encryption_key rejected: {e}"))
        })?;
        let store = create_log_store(config)?;

        tracing::info!(
            key_fingerprint = cipher.key_fingerprint(),
            store = store.name(),
            "Audit logger initialized"
        );

        Ok(Self::new(Arc::new(cipher), store))
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn LogStore> {
        &self.store
    }

    /// Records one registration-affecting action
    ///
    /// # Errors
    ///
    /// - [`AuditError::InvalidActionKind`] if `event.action` is not one of the
    ///   four known kinds. Nothing is encrypted or stored.
    /// - [`AuditError::Encryption`] if any identity field fails to encrypt.
    ///   Nothing is stored.
    ///
    /// Store failures are not errors; see the module docs.
    pub async fn record(&self, event: RegistrationEvent) -> Result<RecordOutcome> {
        let action = ActionKind::from_str(&event.action)?;

        let record = self.seal(action, event)?;
        let id = record.id();
        let store = self.store.name();

        match self.store.insert(&record).await {
            Ok(()) => {
                log_audit_recorded!(id, action, store);
                Ok(RecordOutcome::Persisted { id })
            }
            Err(e) => {
                log_audit_store_failure!(id, action, store, e);
                Ok(RecordOutcome::StoreFailed { id })
            }
        }
    }

    /// Records an action without ever failing
    ///
    /// For handlers whose primary action already succeeded: any error from
    /// [`record`](Self::record) is logged and reported as
    /// [`RecordOutcome::Rejected`].
    pub async fn record_best_effort(&self, event: RegistrationEvent) -> RecordOutcome {
        let raw_action = event.action.clone();
        match self.record(event).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    action = %raw_action,
                    "Audit record rejected; primary action continues"
                );
                RecordOutcome::Rejected
            }
        }
    }

    fn seal(&self, action: ActionKind, event: RegistrationEvent) -> Result<EncryptedActionRecord> {
        let subject = self.encrypt_identity(&event.subject)?;
        let actor = self.encrypt_identity(&event.actor)?;

        Ok(EncryptedActionRecord::new(
            action,
            subject,
            actor,
            event.call_title,
            event.call_code,
        ))
    }

    /// One cipher call per field; fields are never concatenated
    fn encrypt_identity(
        &self,
        identity: &Identity,
    ) -> std::result::Result<EncryptedIdentity, CipherError> {
        Ok(EncryptedIdentity {
            user_id: self.cipher.encrypt_field(&identity.user_id)?,
            cpf: self.cipher.encrypt_field(&identity.cpf)?,
            name: self.cipher.encrypt_field(&identity.name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{EncryptionKey, KEY_LEN};
    use crate::domain::{CipherText, StoreError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingStore {
        inserts: AtomicUsize,
    }

    #[async_trait]
    impl LogStore for CountingStore {
        async fn insert(
            &self,
            _record: &EncryptedActionRecord,
        ) -> std::result::Result<(), StoreError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    struct CountingCipher {
        calls: AtomicUsize,
    }

    impl FieldCipher for CountingCipher {
        fn encrypt_field(&self, plain_text: &str) -> std::result::Result<CipherText, CipherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CipherText::new(format!("enc({})", plain_text.len())))
        }

        fn decrypt_field(&self, _cipher_text: &CipherText) -> std::result::Result<String, CipherError> {
            Err(CipherError::DecryptionFailed("not supported".to_string()))
        }
    }

    fn event(action: &str) -> RegistrationEvent {
        RegistrationEvent::builder(action)
            .subject(Identity::new("user123", "12345678901", "João Silva"))
            .build()
    }

    #[tokio::test]
    async fn test_each_identity_field_encrypted_separately() {
        let cipher = Arc::new(CountingCipher {
            calls: AtomicUsize::new(0),
        });
        let store = Arc::new(CountingStore::default());
        let logger = AuditLogger::new(cipher.clone(), store.clone());

        let outcome = logger.record(event("REGISTRATION")).await.unwrap();

        assert!(outcome.is_persisted());
        assert_eq!(cipher.calls.load(Ordering::SeqCst), 6);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_action_touches_nothing() {
        let cipher = Arc::new(CountingCipher {
            calls: AtomicUsize::new(0),
        });
        let store = Arc::new(CountingStore::default());
        let logger = AuditLogger::new(cipher.clone(), store.clone());

        let err = logger.record(event("APPROVE")).await.unwrap_err();

        assert!(matches!(err, AuditError::InvalidActionKind(ref v) if v == "APPROVE"));
        assert_eq!(cipher.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_best_effort_converts_rejection() {
        let key = EncryptionKey::from_bytes([3u8; KEY_LEN]);
        let logger = AuditLogger::new(
            Arc::new(AesGcmFieldCipher::new(&key).unwrap()),
            Arc::new(CountingStore::default()),
        );

        let outcome = logger.record_best_effort(event("bogus")).await;
        assert_eq!(outcome, RecordOutcome::Rejected);
        assert_eq!(outcome.record_id(), None);
    }

    #[test]
    fn test_record_outcome_helpers() {
        let id = Uuid::new_v4();
        assert!(RecordOutcome::Persisted { id }.is_persisted());
        assert!(!RecordOutcome::StoreFailed { id }.is_persisted());
        assert_eq!(RecordOutcome::StoreFailed { id }.record_id(), Some(id));
    }
}
