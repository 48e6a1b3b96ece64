//! JSON Lines file log store

use crate::adapters::store::LogStore;
use crate::domain::{EncryptedActionRecord, StoreError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Append-only JSON Lines store
///
/// One serialized [`EncryptedActionRecord`] per line. The file is only ever
/// opened in append mode, and writes go through a mutex so lines from
/// concurrent inserts never interleave.
pub struct FileLogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLogStore {
    /// Create a new file store, creating the parent directory if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Io(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LogStore for FileLogStore {
    async fn insert(&self, record: &EncryptedActionRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                StoreError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.path.display()
                ))
            })?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| StoreError::InsertFailed(format!("Failed to write audit record: {e}")))?;
        file.flush()
            .await
            .map_err(|e| StoreError::InsertFailed(format!("Failed to flush audit record: {e}")))?;

        Ok(())
    }

    async fn test_connection(&self) -> Result<(), StoreError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map(|_| ())
            .map_err(|e| {
                StoreError::ConnectionFailed(format!(
                    "Audit log {} is not writable: {e}",
                    self.path.display()
                ))
            })
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
