//! Record store factory

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::postgres::PostgresPool;

use super::backend::{RecordStore, StoreError};
use super::memory_backend::MemoryRecordStore;
use super::postgres_backend::PostgresRecordStore;

/// Create a record store based on configuration.
///
/// Returns the appropriate backend implementation based on the `backend` setting:
/// - `"postgres"`: Returns a `PostgresRecordStore` if a PostgreSQL pool is provided,
///   after ensuring its tables exist
/// - `"memory"` (default): Returns a `MemoryRecordStore`
///
/// # Example
///
/// ```rust,ignore
/// let store = create_record_store(&settings.storage, Some(pg_pool.clone())).await?;
/// ```
pub async fn create_record_store(
    settings: &StorageConfig,
    postgres_pool: Option<Arc<PostgresPool>>,
) -> Result<Arc<dyn RecordStore>, StoreError> {
    match settings.backend.as_str() {
        "postgres" => {
            if let Some(pool) = postgres_pool {
                tracing::info!(backend = "postgres", "Creating PostgreSQL record store");
                let store = PostgresRecordStore::new(pool.pool().clone());
                store.ensure_schema().await?;
                Ok(Arc::new(store))
            } else {
                tracing::warn!(
                    "PostgreSQL backend requested but no pool provided, falling back to memory"
                );
                Ok(Arc::new(MemoryRecordStore::new()))
            }
        }
        "memory" => {
            tracing::info!(backend = "memory", "Creating memory record store");
            Ok(Arc::new(MemoryRecordStore::new()))
        }
        other => {
            tracing::warn!(backend = %other, "Unknown storage backend, using memory");
            Ok(Arc::new(MemoryRecordStore::new()))
        }
    }
}
