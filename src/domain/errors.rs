//! Domain error types
//!
//! This module defines the error hierarchy for the audit log. Subsystem
//! errors ([`CipherError`], [`StoreError`]) convert into [`AuditError`]
//! with `?`, and none of them expose third-party types.

use thiserror::Error;

/// Main audit error type
///
/// This is the primary error type used throughout the crate.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Missing or invalid configuration (including the encryption key).
    /// Fatal at startup, never raised mid-request.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller passed an action outside the enumerated set
    #[error("Invalid action kind: '{0}'")]
    InvalidActionKind(String),

    /// Field encryption failed
    #[error("Encryption error: {0}")]
    Encryption(#[from] CipherError),

    /// Log store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Field cipher errors
///
/// Messages never include plaintext or key material.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// Key has the wrong length or encoding
    #[error("Invalid encryption key: {0}")]
    InvalidKey(String),

    /// The AEAD primitive rejected the input
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Authentication tag mismatch, wrong key, or corrupted payload
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// Stored value is not valid base64 or is too short to hold a nonce
    #[error("Malformed ciphertext: {0}")]
    MalformedCipherText(String),
}

/// Log store errors
///
/// Errors that occur when persisting audit records. These errors don't
/// expose driver types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the store
    #[error("Failed to connect to log store: {0}")]
    ConnectionFailed(String),

    /// Failed to insert a record
    #[error("Failed to insert audit record: {0}")]
    InsertFailed(String),

    /// Failed to create or verify the storage schema
    #[error("Failed to prepare log store schema: {0}")]
    SchemaFailed(String),

    /// Record could not be encoded for storage
    #[error("Failed to serialize audit record: {0}")]
    Serialization(String),

    /// Filesystem failure in a file-backed store
    #[error("Log store I/O error: {0}")]
    Io(String),
}

impl AuditError {
    /// Whether this error came from the persistence step
    pub fn is_store_error(&self) -> bool {
        matches!(self, AuditError::Store(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AuditError {
    fn from(err: toml::de::Error) -> Self {
        AuditError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
