//! Backend trait for template and image record storage.
//!
//! This module defines the abstraction layer for record stores, allowing
//! different storage implementations (memory, PostgreSQL) to be used
//! interchangeably.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::template::{ImageRecord, TemplateRecord};

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this id already exists
    #[error("Record already exists: {0}")]
    Duplicate(Uuid),

    /// PostgreSQL operation failed
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),
}

/// Statistics about the record store.
#[derive(Debug, Clone, Serialize)]
pub struct RecordStoreStats {
    /// Backend type identifier
    pub backend_type: String,

    /// Number of stored templates
    pub templates: usize,

    /// Number of stored images
    pub images: usize,
}

/// Backend trait for persisting template and image records.
///
/// Records are insert-only: there are no update or delete operations. Each
/// insert succeeds or fails atomically per record.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) as one store handle is
/// built at start-up and shared by every request handler.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Backend type identifier ("memory", "postgres").
    fn backend_name(&self) -> &'static str;

    /// Persist a template record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Duplicate` if the id is already taken and
    /// `StoreError::Postgres` for database failures.
    async fn insert_template(&self, record: TemplateRecord) -> Result<TemplateRecord, StoreError>;

    /// Persist an image record.
    async fn insert_image(&self, record: ImageRecord) -> Result<ImageRecord, StoreError>;

    /// Fetch a template by id.
    async fn get_template(&self, id: Uuid) -> Result<Option<TemplateRecord>, StoreError>;

    /// List all templates, newest first.
    async fn list_templates(&self) -> Result<Vec<TemplateRecord>, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Get record store statistics.
    async fn stats(&self) -> RecordStoreStats;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let id = Uuid::nil();
        let err = StoreError::Duplicate(id);
        assert!(err.to_string().contains(&id.to_string()));

        let err = StoreError::from(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("PostgreSQL error:"));
    }
}
