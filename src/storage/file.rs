use super::StorageBackend;
use crate::constants::BLOB_FILE_EXTENSION;
use crate::errors::StorageError;
use std::fs::{self, Permissions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Ensures the data directory exists, creating it if necessary.
///
/// Newly created directories are restricted to the owner on unix.
///
/// # Errors
///
/// Returns an `io::Error` if the path is relative or the directory cannot be
/// created or secured.
pub fn ensure_data_dir(data_dir: &Path) -> io::Result<()> {
    if !data_dir.is_absolute() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Data directory path must be absolute: {}", data_dir.display()),
        ));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;

        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions)?;
            tracing::debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// Stores each key as `<dir>/<key>.json`.
///
/// Values are written to a temporary file next to the target and renamed over it,
/// so a crash or failed write never leaves a half-written blob behind.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBackend { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps a key onto its blob path, rejecting keys that could escape the directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", key, BLOB_FILE_EXTENSION)))
    }
}

fn write_atomically(dir: &Path, path: &Path, value: &str) -> io::Result<()> {
    ensure_data_dir(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(value.as_bytes())?;
    temp.as_file().sync_all()?;

    #[cfg(unix)]
    temp.as_file()
        .set_permissions(Permissions::from_mode(crate::constants::DEFAULT_FILE_PERMISSIONS))?;

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl StorageBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        tracing::debug!(key, "Reading blob from disk");

        match tokio::fs::read(&path).await {
            // Bytes that are not UTF-8 are bad data, not a failed read; the store's
            // corruption policy decides what happens to them.
            Ok(bytes) => Ok(Some(match String::from_utf8(bytes) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(key, "Stored blob is not valid UTF-8");
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let dir = self.dir.clone();
        let value = value.to_string();
        tracing::debug!(key, bytes = value.len(), "Writing blob to disk");

        let result = tokio::task::spawn_blocking(move || write_atomically(&dir, &path, &value))
            .await
            .unwrap_or_else(|join_error| Err(io::Error::other(join_error)));

        result.map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })
    }
}
