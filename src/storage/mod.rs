//! Key-value persistence backends.
//!
//! The entry store talks to storage only through the `StorageBackend` trait: an
//! asynchronous get/set of whole string values by key. Writes always replace the
//! full value; there is no append or partial update.

mod file;
mod memory;

pub use file::{ensure_data_dir, FileBackend};
pub use memory::MemoryBackend;

use crate::errors::StorageError;
use std::future::Future;
use std::sync::Arc;

/// Asynchronous string blob storage addressed by key.
///
/// Implementations must make `set` all-or-nothing from the caller's point of view:
/// when it returns an error the previous value must still be readable.
///
/// # Examples
///
/// ```
/// use moodlog::storage::{MemoryBackend, StorageBackend};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let backend = MemoryBackend::new();
/// assert_eq!(backend.get("k").await.unwrap(), None);
/// backend.set("k", "v").await.unwrap();
/// assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("v"));
/// # });
/// ```
pub trait StorageBackend: Send + Sync {
    /// Reads the value under `key`; `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Replaces the value under `key`.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

impl<B: StorageBackend> StorageBackend for Arc<B> {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>> + Send {
        (**self).set(key, value)
    }
}
