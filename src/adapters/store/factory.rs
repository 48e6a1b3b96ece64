//! Log store factory
//!
//! Creates the configured [`LogStore`] implementation.

use crate::adapters::file::FileLogStore;
use crate::adapters::postgresql::{PostgreSQLClient, PostgresLogStore};
use crate::adapters::store::LogStore;
use crate::config::schema::{AuditServiceConfig, StoreTarget};
use crate::domain::{AuditError, Result};
use std::sync::Arc;

/// Create a log store based on the configuration
///
/// # Errors
///
/// Returns [`AuditError::Configuration`] if the section for the selected
/// target is missing, or a store error if the adapter cannot be built.
pub fn create_log_store(config: &AuditServiceConfig) -> Result<Arc<dyn LogStore>> {
    match config.store_target {
        StoreTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                AuditError::Configuration(
                    "postgresql configuration is required when store_target = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL log store");
            let client = PostgreSQLClient::new(pg_config.clone())?;
            Ok(Arc::new(PostgresLogStore::new(client)))
        }
        StoreTarget::File => {
            let file_config = config.file.as_ref().ok_or_else(|| {
                AuditError::Configuration(
                    "file configuration is required when store_target = 'file'".to_string(),
                )
            })?;

            tracing::info!(path = %file_config.path.display(), "Creating file log store");
            Ok(Arc::new(FileLogStore::new(file_config.path.clone())?))
        }
    }
}
