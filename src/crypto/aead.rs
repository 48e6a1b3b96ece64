//! AES-256-GCM field cipher

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;

use super::key::EncryptionKey;
use super::FieldCipher;
use crate::domain::{CipherError, CipherText};

/// AES-GCM nonce size (96 bits)
const NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size
const TAG_SIZE: usize = 16;

/// Randomized authenticated encryption of single string fields
///
/// Each call draws a fresh nonce, so encrypting the same value twice yields
/// different ciphertexts. Stored form is `base64(nonce || ciphertext || tag)`.
pub struct AesGcmFieldCipher {
    cipher: Aes256Gcm,
    fingerprint: String,
}

impl AesGcmFieldCipher {
    /// Creates a cipher from the configured key
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the primitive rejects the key.
    pub fn new(key: &EncryptionKey) -> Result<Self, CipherError> {
        let cipher = Aes256Gcm::new_from_slice(key.expose())
            .map_err(|e| CipherError::InvalidKey(e.to_string()))?;
        Ok(Self {
            cipher,
            fingerprint: key.fingerprint(),
        })
    }

    /// Fingerprint of the key this cipher was built from
    pub fn key_fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl FieldCipher for AesGcmFieldCipher {
    fn encrypt_field(&self, plain_text: &str) -> Result<CipherText, CipherError> {
        if plain_text.is_empty() {
            return Ok(CipherText::empty());
        }

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plain_text.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut payload = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&ciphertext);

        Ok(CipherText::new(STANDARD.encode(payload)))
    }

    fn decrypt_field(&self, cipher_text: &CipherText) -> Result<String, CipherError> {
        if cipher_text.is_empty() {
            return Ok(String::new());
        }

        let payload = STANDARD
            .decode(cipher_text.as_str())
            .map_err(|e| CipherError::MalformedCipherText(e.to_string()))?;

        if payload.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CipherError::MalformedCipherText(format!(
                "payload is {} bytes, shorter than nonce and tag",
                payload.len()
            )));
        }

        let (nonce_bytes, sealed) = payload.split_at(NONCE_SIZE);
        let plain = self
            .cipher
            .decrypt(Nonce::from_slice(nonce_bytes), sealed)
            .map_err(|_| {
                CipherError::DecryptionFailed(
                    "authentication failed (wrong key or tampered value)".to_string(),
                )
            })?;

        String::from_utf8(plain)
            .map_err(|_| CipherError::DecryptionFailed("plaintext is not UTF-8".to_string()))
    }
}
