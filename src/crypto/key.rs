//! Field encryption key
//!
//! The key is process-wide configuration, loaded once at startup from a
//! base64 string. It lives in a [`Secret`] so the bytes are zeroized on
//! drop and never show up in `Debug` output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;
use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::Zeroizing;

use crate::domain::{AuditError, Result};

/// Key length for AES-256
pub const KEY_LEN: usize = 32;

/// 256-bit symmetric key for field encryption
pub struct EncryptionKey(Secret<[u8; KEY_LEN]>);

impl EncryptionKey {
    /// Wraps raw key bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(Secret::new(bytes))
    }

    /// Parses a base64-encoded key
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Configuration`] if the value is empty, not valid
    /// base64, or does not decode to exactly 32 bytes. The service must not
    /// start with such a key.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let encoded = encoded.trim();
        if encoded.is_empty() {
            return Err(AuditError::Configuration(
                "audit.encryption_key is empty".to_string(),
            ));
        }

        let decoded = Zeroizing::new(STANDARD.decode(encoded).map_err(|e| {
            AuditError::Configuration(format!("audit.encryption_key is not valid base64: {e}"))
        })?);

        if decoded.len() != KEY_LEN {
            return Err(AuditError::Configuration(format!(
                "audit.encryption_key must decode to {KEY_LEN} bytes, got {}",
                decoded.len()
            )));
        }

        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self::from_bytes(bytes))
    }

    /// Generates a fresh random key
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self::from_bytes(bytes)
    }

    /// Base64 encoding of the key, for writing it into configuration
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(STANDARD.encode(self.0.expose_secret()))
    }

    /// Short SHA-256 fingerprint that identifies the key without revealing it
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.expose_secret());
        let hex = format!("{digest:x}");
        hex[..16].to_string()
    }

    pub(crate) fn expose(&self) -> &[u8; KEY_LEN] {
        self.0.expose_secret()
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptionKey([REDACTED], fingerprint={})", self.fingerprint())
    }
}
