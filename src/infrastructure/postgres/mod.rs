//! PostgreSQL persistence module.
//!
//! Provides connection pooling for the PostgreSQL record store.

pub mod pool;

pub use pool::{PostgresPool, PostgresPoolError};
