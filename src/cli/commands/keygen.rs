//! Keygen command implementation
//!
//! Prints a fresh 256-bit key, base64-encoded, suitable for
//! `audit.encryption_key` or `EDITAL_AUDIT_AUDIT_ENCRYPTION_KEY`.

use crate::crypto::EncryptionKey;
use clap::Args;

/// Arguments for the keygen command
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Also print the key fingerprint to stderr
    #[arg(long)]
    pub show_fingerprint: bool,
}

impl KeygenArgs {
    /// Execute the keygen command
    ///
    /// Only the key goes to stdout so the output can be piped straight into
    /// a secret manager.
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let key = EncryptionKey::generate();

        tracing::info!(key_fingerprint = %key.fingerprint(), "Generated encryption key");

        println!("{}", key.to_base64().as_str());
        if self.show_fingerprint {
            eprintln!("fingerprint: {}", key.fingerprint());
        }

        Ok(0)
    }
}
