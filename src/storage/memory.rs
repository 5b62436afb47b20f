use super::StorageBackend;
use crate::errors::StorageError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-process backend. Clones share the same underlying map.
///
/// An optional byte quota makes oversized writes fail the way a full device
/// would, leaving the previous value untouched.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that rejects any single value longer than `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        MemoryBackend {
            quota: Some(limit),
            ..Self::default()
        }
    }

    /// Stores `value` without going through the async interface.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    /// Reads the stored value without going through the async interface.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        tracing::debug!(key, "Reading from memory backend");
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size: value.len(),
                    limit,
                });
            }
        }
        tracing::debug!(key, bytes = value.len(), "Writing to memory backend");
        self.insert_raw(key, value);
        Ok(())
    }
}
