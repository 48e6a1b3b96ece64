//! Log store abstraction
//!
//! This module defines the trait that persistence adapters implement to
//! receive audit records.

use crate::domain::{EncryptedActionRecord, StoreError};
use async_trait::async_trait;

/// Append-only sink for encrypted audit records
///
/// The contract is insert-only: there is no update or delete
/// method, and implementations must not overwrite an existing record.
/// Implementations serialize their own writes; callers may insert
/// concurrently.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Appends one record
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the record could not be persisted. The
    /// audit logger absorbs this error; adapters should still report it
    /// accurately.
    async fn insert(&self, record: &EncryptedActionRecord) -> Result<(), StoreError>;

    /// Checks that the store is reachable
    async fn test_connection(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Creates the storage schema if it does not exist yet
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Short name used in diagnostics
    fn name(&self) -> &'static str;
}
