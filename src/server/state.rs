use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::layout::{create_layout_source, LayoutSource};
use crate::postgres::{PostgresPool, PostgresPoolError};
use crate::store::{create_record_store, RecordStore, StoreError};

/// Failures while building the application state at start-up.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Postgres(#[from] PostgresPoolError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub layout_source: Arc<dyn LayoutSource>,
    pub record_store: Arc<dyn RecordStore>,
    pub postgres_pool: Option<Arc<PostgresPool>>,
    pub start_time: Instant,
}

impl AppState {
    /// Assemble state from already-built collaborators.
    pub fn new(
        settings: Settings,
        layout_source: Arc<dyn LayoutSource>,
        record_store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            layout_source,
            record_store,
            postgres_pool: None,
            start_time: Instant::now(),
        }
    }

    pub fn with_postgres_pool(mut self, pool: Arc<PostgresPool>) -> Self {
        self.postgres_pool = Some(pool);
        self
    }

    /// Build the layout source, connect to PostgreSQL when configured and
    /// create the record store.
    pub async fn from_settings(settings: Settings) -> Result<Self, StateError> {
        let layout_source = create_layout_source(&settings.layout);

        let postgres_pool = if settings.uses_postgres() {
            Some(Arc::new(
                PostgresPool::from_optional(settings.database.as_ref()).await?,
            ))
        } else {
            None
        };

        let record_store = create_record_store(&settings.storage, postgres_pool.clone()).await?;

        let state = Self::new(settings, layout_source, record_store);
        Ok(match postgres_pool {
            Some(pool) => state.with_postgres_pool(pool),
            None => state,
        })
    }
}
