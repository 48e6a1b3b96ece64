//! PostgreSQL log store

use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::store::LogStore;
use crate::domain::{EncryptedActionRecord, StoreError};
use async_trait::async_trait;
use std::sync::Arc;

const INSERT_RECORD: &str = r#"
    INSERT INTO registration_audit_log (
        id, subject_user_id, subject_cpf, subject_name,
        actor_user_id, actor_cpf, actor_name,
        action, call_title, call_code, recorded_at
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
"#;

/// [`LogStore`] over the `registration_audit_log` table
///
/// Each record is one parameterized `INSERT`. There is no `ON CONFLICT`
/// clause: a duplicate id is an error, never an overwrite.
pub struct PostgresLogStore {
    client: Arc<PostgreSQLClient>,
}

impl PostgresLogStore {
    /// Create a new store
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgreSQLClient> {
        &self.client
    }
}

#[async_trait]
impl LogStore for PostgresLogStore {
    async fn insert(&self, record: &EncryptedActionRecord) -> Result<(), StoreError> {
        let id = record.id();
        let action = record.action().as_str();
        let call_title = record.call_title();
        let call_code = record.call_code();
        let recorded_at = record.timestamp();

        let inserted = self
            .client
            .execute(
                INSERT_RECORD,
                &[
                    &id,
                    &record.subject_user_id().as_str(),
                    &record.subject_cpf().as_str(),
                    &record.subject_name().as_str(),
                    &record.actor_user_id().as_str(),
                    &record.actor_cpf().as_str(),
                    &record.actor_name().as_str(),
                    &action,
                    &call_title,
                    &call_code,
                    &recorded_at,
                ],
            )
            .await?;

        if inserted != 1 {
            return Err(StoreError::InsertFailed(format!(
                "expected 1 row inserted for record {id}, got {inserted}"
            )));
        }

        Ok(())
    }

    async fn test_connection(&self) -> Result<(), StoreError> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.client.ensure_schema().await
    }

    fn name(&self) -> &'static str {
        "postgresql"
    }
}
