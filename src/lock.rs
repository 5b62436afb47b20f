//! Cross-process exclusion for mutating commands.
//!
//! The entry store serializes mutations within one process. Two `moodlog`
//! invocations running at once would still race on the same blob, so mutating
//! commands hold an advisory lock on a file in the data directory for their whole
//! duration.

use crate::constants::LOCK_FILE_NAME;
use crate::errors::LockError;
use crate::storage::ensure_data_dir;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// An exclusive lock on the data directory, released on drop.
#[derive(Debug)]
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Takes the lock without waiting.
    ///
    /// # Errors
    ///
    /// - `LockError::StoreBusy` if another process holds the lock
    /// - `LockError::AcquisitionFailed` if the lock file cannot be created or locked
    pub fn acquire(data_dir: &Path) -> Result<Self, LockError> {
        let path = data_dir.join(LOCK_FILE_NAME);
        let failed = |source| LockError::AcquisitionFailed {
            path: path.clone(),
            source,
        };

        ensure_data_dir(data_dir).map_err(failed)?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(failed)?;

        match FileExt::try_lock_exclusive(&file) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Acquired store lock");
                Ok(StoreLock { file, path })
            }
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                Err(LockError::StoreBusy { path })
            }
            Err(e) => Err(failed(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to release store lock");
        }
    }
}
