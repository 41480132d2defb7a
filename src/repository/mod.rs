//! Persistence layer for image flags.
//!
//! `bootstrap` owns the one-time schema creation over rusqlite; the Diesel
//! side (connection factory + repository) serves the request path.

pub mod bootstrap;
mod diesel_flag;
mod diesel_models;
mod diesel_pool;

pub use diesel_flag::DieselFlagRepository;
pub use diesel_models::FlagRecord;
pub use diesel_pool::AsyncSqlitePool;

use std::path::Path;

use thiserror::Error;

/// Errors from the Diesel side of the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Database context wiring the connection factory to repositories.
///
/// Create one per command or service, then use it to access repositories.
#[derive(Clone)]
pub struct DbContext {
    pool: AsyncSqlitePool,
}

impl DbContext {
    /// Create a context for a SQLite file path.
    pub fn new(db_path: &Path) -> Self {
        Self {
            pool: AsyncSqlitePool::from_path(db_path),
        }
    }

    /// Get a flag repository.
    pub fn flags(&self) -> DieselFlagRepository {
        DieselFlagRepository::new(self.pool.clone())
    }
}
