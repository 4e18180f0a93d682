//! Record store for saved templates and uploaded images.
//!
//! # Architecture
//!
//! The store uses a backend abstraction to support different storage
//! implementations:
//!
//! - `MemoryRecordStore`: In-memory storage using DashMap (default)
//! - `PostgresRecordStore`: Persistent storage using PostgreSQL
//!
//! Use `create_record_store()` to create the appropriate backend based on
//! configuration. The resulting handle is built once at start-up and passed to
//! handlers through `AppState`.

pub mod backend;
mod factory;
pub mod memory_backend;
pub mod postgres_backend;

pub use backend::{RecordStore, RecordStoreStats, StoreError};
pub use factory::create_record_store;
pub use memory_backend::MemoryRecordStore;
pub use postgres_backend::PostgresRecordStore;
