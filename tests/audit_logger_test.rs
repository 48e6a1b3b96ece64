//! Integration tests for the audit logger
//!
//! Runs the logger against in-memory store and cipher doubles and checks
//! what reaches the store.

use async_trait::async_trait;
use edital_audit::adapters::store::LogStore;
use edital_audit::core::audit::{AuditLogger, RecordOutcome};
use edital_audit::crypto::{AesGcmFieldCipher, EncryptionKey, FieldCipher, KEY_LEN};
use edital_audit::domain::{
    ActionKind, AuditError, CipherError, CipherText, EncryptedActionRecord, Identity,
    RegistrationEvent, StoreError,
};
use fake::faker::name::en::Name;
use fake::Fake;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use test_case::test_case;

/// Keeps every inserted record
#[derive(Default)]
struct RecordingStore {
    records: Mutex<Vec<EncryptedActionRecord>>,
}

impl RecordingStore {
    fn records(&self) -> Vec<EncryptedActionRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogStore for RecordingStore {
    async fn insert(&self, record: &EncryptedActionRecord) -> Result<(), StoreError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Rejects every insert
#[derive(Default)]
struct FailingStore {
    attempts: AtomicUsize,
}

#[async_trait]
impl LogStore for FailingStore {
    async fn insert(&self, _record: &EncryptedActionRecord) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::ConnectionFailed("database unavailable".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Fails on every encryption
struct FailingCipher;

impl FieldCipher for FailingCipher {
    fn encrypt_field(&self, _plain_text: &str) -> Result<CipherText, CipherError> {
        Err(CipherError::EncryptionFailed("hardware fault".to_string()))
    }

    fn decrypt_field(&self, _cipher_text: &CipherText) -> Result<String, CipherError> {
        Err(CipherError::DecryptionFailed("hardware fault".to_string()))
    }
}

fn test_cipher() -> AesGcmFieldCipher {
    AesGcmFieldCipher::new(&EncryptionKey::from_bytes([7u8; KEY_LEN])).unwrap()
}

fn logger_with(store: Arc<dyn LogStore>) -> AuditLogger {
    AuditLogger::new(Arc::new(test_cipher()), store)
}

fn joao() -> Identity {
    Identity::new("user123", "12345678901", "João Silva")
}

fn random_identity() -> Identity {
    let cpf: u64 = (10_000_000_000u64..100_000_000_000u64).fake();
    let user_id: u32 = (1u32..1_000_000u32).fake();
    let name: String = Name().fake();
    Identity::new(format!("user{user_id}"), cpf.to_string(), name)
}

fn portal_payload(action: &str, call_title: Option<&str>) -> RegistrationEvent {
    let mut payload = serde_json::json!({
        "subjectUserId": "user123",
        "subjectCpf": "12345678901",
        "subjectName": "João Silva",
        "actorUserId": "user123",
        "actorCpf": "12345678901",
        "actorName": "João Silva",
        "action": action,
    });
    if let Some(title) = call_title {
        payload["callTitle"] = serde_json::Value::String(title.to_string());
    }
    serde_json::from_value(payload).unwrap()
}

#[test_case("REGISTRATION", ActionKind::Registration ; "registration")]
#[test_case("CANCEL_BY_USER", ActionKind::CancelByUser ; "cancel by user")]
#[test_case("CANCEL_BY_ADMIN", ActionKind::CancelByAdmin ; "cancel by admin")]
#[test_case("CANCEL_BY_COMMITTEE", ActionKind::CancelByCommittee ; "cancel by committee")]
#[tokio::test]
async fn test_action_in_clear_identity_encrypted(action: &str, expected: ActionKind) {
    let store = Arc::new(RecordingStore::default());
    let logger = logger_with(store.clone());

    let subject = random_identity();
    let actor = random_identity();
    let event = RegistrationEvent::builder(action)
        .subject(subject.clone())
        .actor(actor.clone())
        .build();

    let outcome = logger.record(event).await.unwrap();
    assert!(outcome.is_persisted());

    let records = store.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.action(), expected);
    assert_eq!(outcome.record_id(), Some(record.id()));

    let plaintexts = [
        &subject.user_id,
        &subject.cpf,
        &subject.name,
        &actor.user_id,
        &actor.cpf,
        &actor.name,
    ];
    for ((field, stored), plain) in record.identity_fields().iter().zip(plaintexts) {
        assert!(!stored.is_empty(), "{field} should not be empty");
        assert_ne!(stored.as_str(), plain.as_str(), "{field} stored in clear");
    }
}

#[tokio::test]
async fn test_stored_fields_decrypt_to_input() {
    let store = Arc::new(RecordingStore::default());
    let logger = logger_with(store.clone());
    let admin = Identity::new("admin1", "98765432100", "Maria Admin");

    logger
        .record(RegistrationEvent::new(
            ActionKind::CancelByAdmin,
            joao(),
            admin.clone(),
        ))
        .await
        .unwrap();

    let records = store.records();
    let record = &records[0];
    let cipher = test_cipher();
    let decrypt = |c: &CipherText| cipher.decrypt_field(c).unwrap();

    assert_eq!(decrypt(record.subject_user_id()), "user123");
    assert_eq!(decrypt(record.subject_cpf()), "12345678901");
    assert_eq!(decrypt(record.subject_name()), "João Silva");
    assert_eq!(decrypt(record.actor_user_id()), admin.user_id);
    assert_eq!(decrypt(record.actor_cpf()), admin.cpf);
    assert_eq!(decrypt(record.actor_name()), admin.name);
}

#[tokio::test]
async fn test_same_value_in_two_fields_encrypts_differently() {
    let store = Arc::new(RecordingStore::default());
    let logger = logger_with(store.clone());

    // Self-service: subject and actor carry identical plaintext
    logger
        .record(RegistrationEvent::self_service(ActionKind::Registration, joao()))
        .await
        .unwrap();

    let records = store.records();
    let record = &records[0];
    assert_ne!(record.subject_cpf(), record.actor_cpf());

    let cipher = test_cipher();
    assert_eq!(
        cipher.decrypt_field(record.subject_cpf()).unwrap(),
        cipher.decrypt_field(record.actor_cpf()).unwrap()
    );
}

#[tokio::test]
async fn test_absent_call_title_distinct_from_empty() {
    let store = Arc::new(RecordingStore::default());
    let logger = logger_with(store.clone());

    logger
        .record(portal_payload("REGISTRATION", None))
        .await
        .unwrap();
    logger
        .record(portal_payload("REGISTRATION", Some("")))
        .await
        .unwrap();

    let records = store.records();
    assert_eq!(records[0].call_title(), None);
    assert_eq!(records[1].call_title(), Some(""));

    let absent = serde_json::to_value(&records[0]).unwrap();
    let empty = serde_json::to_value(&records[1]).unwrap();
    assert!(absent["call_title"].is_null());
    assert_eq!(empty["call_title"], "");
}

#[test_case("APPROVE" ; "unknown verb")]
#[test_case("registration" ; "wrong case")]
#[test_case("" ; "empty")]
#[test_case(" REGISTRATION" ; "leading space")]
#[test_case("INSCRICAO" ; "portuguese registration")]
#[test_case("CANCELAMENTO_USUARIO" ; "portuguese cancel by user")]
#[test_case("CANCELAMENTO_ADMIN" ; "portuguese cancel by admin")]
#[test_case("CANCELAMENTO_COMISSAO" ; "portuguese cancel by committee")]
#[tokio::test]
async fn test_invalid_action_rejected_before_store(action: &str) {
    let store = Arc::new(RecordingStore::default());
    let logger = logger_with(store.clone());

    let err = logger
        .record(portal_payload(action, Some("Edital Teste")))
        .await
        .unwrap_err();

    assert!(matches!(err, AuditError::InvalidActionKind(ref v) if v == action));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_registration_scenario() {
    let store = Arc::new(RecordingStore::default());
    let logger = logger_with(store.clone());

    logger
        .record(portal_payload("REGISTRATION", Some("Edital Teste")))
        .await
        .unwrap();

    let records = store.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.action(), ActionKind::Registration);
    assert_eq!(record.call_title(), Some("Edital Teste"));

    let json = serde_json::to_string(record).unwrap();
    assert!(!json.contains("user123"));
    assert!(!json.contains("12345678901"));
    assert!(!json.contains("João Silva"));
}

#[tokio::test]
async fn test_cancel_by_user_scenario_without_title() {
    let store = Arc::new(RecordingStore::default());
    let logger = logger_with(store.clone());

    logger
        .record(portal_payload("CANCEL_BY_USER", None))
        .await
        .unwrap();

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].action(), ActionKind::CancelByUser);
    assert_eq!(records[0].call_title(), None);

    let json = serde_json::to_string(&records[0]).unwrap();
    assert!(!json.contains("undefined"));
}

#[tokio::test]
async fn test_store_failure_is_absorbed() {
    let store = Arc::new(FailingStore::default());
    let logger = logger_with(store.clone());

    let outcome = logger
        .record(portal_payload("REGISTRATION", Some("Edital Teste")))
        .await
        .expect("store failure must not propagate");

    assert!(matches!(outcome, RecordOutcome::StoreFailed { .. }));
    assert!(!outcome.is_persisted());
    assert!(outcome.record_id().is_some());
    assert_eq!(store.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cipher_failure_propagates_without_insert() {
    let store = Arc::new(RecordingStore::default());
    let logger = AuditLogger::new(Arc::new(FailingCipher), store.clone());

    let err = logger
        .record(portal_payload("REGISTRATION", None))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AuditError::Encryption(CipherError::EncryptionFailed(_))
    ));
    assert!(store.records().is_empty());
}

#[tokio::test]
async fn test_best_effort_never_fails() {
    let logger = AuditLogger::new(Arc::new(FailingCipher), Arc::new(RecordingStore::default()));
    let outcome = logger
        .record_best_effort(portal_payload("REGISTRATION", None))
        .await;
    assert_eq!(outcome, RecordOutcome::Rejected);

    let logger = logger_with(Arc::new(FailingStore::default()));
    let outcome = logger
        .record_best_effort(portal_payload("CANCEL_BY_COMMITTEE", None))
        .await;
    assert!(matches!(outcome, RecordOutcome::StoreFailed { .. }));
}

#[tokio::test]
async fn test_concurrent_records_get_distinct_ids() {
    let store = Arc::new(RecordingStore::default());
    let logger = Arc::new(logger_with(store.clone()));

    let mut handles = Vec::new();
    for _ in 0..20 {
        let logger = Arc::clone(&logger);
        handles.push(tokio::spawn(async move {
            logger
                .record(RegistrationEvent::self_service(
                    ActionKind::Registration,
                    random_identity(),
                ))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_persisted());
    }

    let mut ids: Vec<_> = store.records().iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), 20);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
