//! Enrollment persistence for the cohort platform.
//!
//! The [`EnrollmentStore`] trait is the single seam between HTTP handlers
//! and storage. Two backends implement it: [`MemoryStore`] for development
//! and tests, and [`SqliteStore`] for durable single-node deployments.
//! Handlers hold the store as `Arc<dyn EnrollmentStore>` and never know
//! which backend is behind it.

mod error;
mod memory;
mod sqlite;
mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::EnrollmentStore;

use std::path::PathBuf;
use std::sync::Arc;

/// Which backend to run against, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Process-local map. Data is lost on restart.
    Memory,
    /// SQLite database at the given path, created on first open.
    Sqlite(PathBuf),
}

impl Backend {
    /// Opens the backend and returns it behind the store trait.
    pub fn open(&self) -> StoreResult<Arc<dyn EnrollmentStore>> {
        match self {
            Backend::Memory => Ok(Arc::new(MemoryStore::new())),
            Backend::Sqlite(path) => Ok(Arc::new(SqliteStore::open(path)?)),
        }
    }
}
