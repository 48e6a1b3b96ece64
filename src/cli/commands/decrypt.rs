//! Decrypt command implementation
//!
//! Single-field decryption for administrators reviewing the audit trail.
//! The recording path never decrypts.

use crate::config::load_config;
use crate::crypto::{AesGcmFieldCipher, FieldCipher};
use crate::domain::{AuditError, CipherText};
use clap::Args;

/// Arguments for the decrypt command
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Stored ciphertext value (base64)
    pub value: String,
}

impl DecryptArgs {
    /// Execute the decrypt command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let cipher = match config
            .audit
            .encryption_key()
            .and_then(|key| AesGcmFieldCipher::new(&key).map_err(AuditError::from))
        {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Encryption key rejected");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        tracing::warn!(
            key_fingerprint = cipher.key_fingerprint(),
            "Decrypting stored audit field"
        );

        match cipher.decrypt_field(&CipherText::new(self.value.trim())) {
            Ok(plain) => {
                println!("{plain}");
                Ok(0)
            }
            Err(e) => {
                eprintln!("❌ {e}");
                Ok(3) // Invalid input exit code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::EncryptionKey;
    use tempfile::tempdir;

    const KEY: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

    fn write_config(dir: &std::path::Path) -> String {
        let path = dir.join("edital-audit.toml");
        std::fs::write(
            &path,
            format!(
                r#"
store_target = "file"

[audit]
encryption_key = "{KEY}"

[file]
path = "{}"
"#,
                dir.join("audit.jsonl").display()
            ),
        )
        .unwrap();
        path.display().to_string()
    }

    #[tokio::test]
    async fn test_decrypt_with_configured_key() {
        let dir = tempdir().unwrap();
        let config_path = write_config(dir.path());

        let cipher = AesGcmFieldCipher::new(&EncryptionKey::from_base64(KEY).unwrap()).unwrap();
        let stored = cipher.encrypt_field("12345678901").unwrap();

        let args = DecryptArgs {
            value: stored.into_inner(),
        };
        assert_eq!(args.execute(&config_path).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_decrypt_foreign_ciphertext_fails() {
        let dir = tempdir().unwrap();
        let config_path = write_config(dir.path());

        let other = AesGcmFieldCipher::new(&EncryptionKey::generate()).unwrap();
        let stored = other.encrypt_field("12345678901").unwrap();

        let args = DecryptArgs {
            value: stored.into_inner(),
        };
        assert_eq!(args.execute(&config_path).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_decrypt_malformed_value() {
        let dir = tempdir().unwrap();
        let config_path = write_config(dir.path());

        let args = DecryptArgs {
            value: "***".to_string(),
        };
        assert_eq!(args.execute(&config_path).await.unwrap(), 3);
    }
}
