//! Field-level encryption for audit records
//!
//! Every identity-bearing field of an audit record is encrypted on its own,
//! so tooling can later decrypt or redact a subset of fields without
//! touching the rest.
//!
//! # Usage
//!
//! ```rust
//! use edital_audit::crypto::{AesGcmFieldCipher, EncryptionKey, FieldCipher};
//!
//! let key = EncryptionKey::generate();
//! let cipher = AesGcmFieldCipher::new(&key).unwrap();
//!
//! let stored = cipher.encrypt_field("12345678901").unwrap();
//! assert_eq!(cipher.decrypt_field(&stored).unwrap(), "12345678901");
//! ```

pub mod aead;
pub mod key;

pub use aead::AesGcmFieldCipher;
pub use key::{EncryptionKey, KEY_LEN};

use crate::domain::{CipherError, CipherText};

/// Symmetric authenticated encryption of individual string fields
///
/// Implementations must accept empty input and must surface every failure:
/// a swallowed error would let plaintext PII reach storage.
pub trait FieldCipher: Send + Sync {
    /// Encrypts one field
    fn encrypt_field(&self, plain_text: &str) -> Result<CipherText, CipherError>;

    /// Decrypts one field previously produced by `encrypt_field`
    ///
    /// Only the admin tooling calls this; the write path never decrypts.
    fn decrypt_field(&self, cipher_text: &CipherText) -> Result<String, CipherError>;
}
