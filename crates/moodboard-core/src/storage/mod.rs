//! Storage abstraction for board persistence.

mod autosave;
mod file;
mod memory;

pub use autosave::{AutoSaveManager, DEFAULT_AUTOSAVE_INTERVAL_SECS, LAST_BOARD_KEY};
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::snapshot::BoardSnapshot;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Board not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async storage operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for board snapshot storage backends.
///
/// Writes are whole-snapshot and atomic from the engine's point of view;
/// the concrete encoding (JSON, a database row, ...) is the backend's
/// concern. Implementations must be internally synchronized.
pub trait Storage: Send + Sync {
    /// Save a snapshot under a key.
    fn save(&self, key: &str, snapshot: &BoardSnapshot) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the snapshot stored under a key.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<BoardSnapshot>>;

    /// Delete a stored snapshot.
    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all stored keys.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
