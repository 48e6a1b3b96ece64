//! Encrypted audit records
//!
//! [`EncryptedActionRecord`] is the only shape that reaches a log store.
//! It has no setters: once sealed, a record is read and persisted, never
//! changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::action::ActionKind;

/// Opaque, storage-safe encoding of one encrypted field
///
/// An empty `CipherText` stands for an empty plaintext.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CipherText(String);

impl CipherText {
    /// Wraps an already-encoded value (e.g. one read back from storage)
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// The empty ciphertext
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Returns true if this represents an empty plaintext
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the encoded value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the encoded value
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for CipherText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CipherText({} chars)", self.0.len())
    }
}

impl fmt::Display for CipherText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CipherText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An identity whose three fields were encrypted independently
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedIdentity {
    pub user_id: CipherText,
    pub cpf: CipherText,
    pub name: CipherText,
}

/// Write-once audit record with encrypted identity fields
///
/// `action`, `call_title`, `call_code` and `timestamp` stay in clear for
/// reporting. An absent call title serializes as `null`, which is distinct
/// from an explicitly empty title (`""`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedActionRecord {
    id: Uuid,
    subject_user_id: CipherText,
    subject_cpf: CipherText,
    subject_name: CipherText,
    actor_user_id: CipherText,
    actor_cpf: CipherText,
    actor_name: CipherText,
    action: ActionKind,
    call_title: Option<String>,
    call_code: Option<String>,
    timestamp: DateTime<Utc>,
}

impl EncryptedActionRecord {
    /// Seals a new record, assigning its id and timestamp
    pub fn new(
        action: ActionKind,
        subject: EncryptedIdentity,
        actor: EncryptedIdentity,
        call_title: Option<String>,
        call_code: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_user_id: subject.user_id,
            subject_cpf: subject.cpf,
            subject_name: subject.name,
            actor_user_id: actor.user_id,
            actor_cpf: actor.cpf,
            actor_name: actor.name,
            action,
            call_title,
            call_code,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn call_title(&self) -> Option<&str> {
        self.call_title.as_deref()
    }

    pub fn call_code(&self) -> Option<&str> {
        self.call_code.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn subject_user_id(&self) -> &CipherText {
        &self.subject_user_id
    }

    pub fn subject_cpf(&self) -> &CipherText {
        &self.subject_cpf
    }

    pub fn subject_name(&self) -> &CipherText {
        &self.subject_name
    }

    pub fn actor_user_id(&self) -> &CipherText {
        &self.actor_user_id
    }

    pub fn actor_cpf(&self) -> &CipherText {
        &self.actor_cpf
    }

    pub fn actor_name(&self) -> &CipherText {
        &self.actor_name
    }

    /// The six encrypted identity fields with their column names
    pub fn identity_fields(&self) -> [(&'static str, &CipherText); 6] {
        [
            ("subject_user_id", &self.subject_user_id),
            ("subject_cpf", &self.subject_cpf),
            ("subject_name", &self.subject_name),
            ("actor_user_id", &self.actor_user_id),
            ("actor_cpf", &self.actor_cpf),
            ("actor_name", &self.actor_name),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(tag: &str) -> EncryptedIdentity {
        EncryptedIdentity {
            user_id: CipherText::new(format!("{tag}-id")),
            cpf: CipherText::new(format!("{tag}-cpf")),
            name: CipherText::new(format!("{tag}-name")),
        }
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = EncryptedActionRecord::new(
            ActionKind::Registration,
            identity("s"),
            identity("a"),
            None,
            None,
        );
        let b = EncryptedActionRecord::new(
            ActionKind::Registration,
            identity("s"),
            identity("a"),
            None,
            None,
        );
        assert_ne!(a.id(), b.id());
        assert!(a.timestamp() <= b.timestamp());
    }

    #[test]
    fn test_absent_title_serializes_as_null() {
        let record = EncryptedActionRecord::new(
            ActionKind::CancelByUser,
            identity("s"),
            identity("a"),
            None,
            Some("ED-01".to_string()),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["call_title"].is_null());
        assert_eq!(json["call_code"], "ED-01");
        assert_eq!(json["action"], "CANCEL_BY_USER");
    }

    #[test]
    fn test_empty_title_serializes_as_empty_string() {
        let record = EncryptedActionRecord::new(
            ActionKind::Registration,
            identity("s"),
            identity("a"),
            Some(String::new()),
            None,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["call_title"], "");
    }

    #[test]
    fn test_identity_fields_order() {
        let record = EncryptedActionRecord::new(
            ActionKind::Registration,
            identity("s"),
            identity("a"),
            None,
            None,
        );
        let names: Vec<_> = record.identity_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "subject_user_id",
                "subject_cpf",
                "subject_name",
                "actor_user_id",
                "actor_cpf",
                "actor_name"
            ]
        );
        assert_eq!(record.actor_cpf().as_str(), "a-cpf");
    }

    #[test]
    fn test_ciphertext_debug_hides_value() {
        let ct = CipherText::new("c2VjcmV0");
        assert_eq!(format!("{ct:?}"), "CipherText(8 chars)");
        assert!(CipherText::empty().is_empty());
    }
}
