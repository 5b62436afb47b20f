//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, the dedicated
//! `StorageError` and `LockError` types it wraps, and the convenience type alias
//! `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when reading or writing the
/// persistence backend.
///
/// Every variant carries the storage key involved so that a message read in a log
/// line is enough to locate the blob.
///
/// # Examples
///
/// ```
/// use moodlog::errors::StorageError;
/// use std::io::{self, ErrorKind};
///
/// let error = StorageError::Write {
///     key: "moodEntries".to_string(),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// assert!(format!("{}", error).contains("moodEntries"));
/// assert!(format!("{}", error).contains("permission denied"));
/// ```
///
/// Creating a quota error:
///
/// ```
/// use moodlog::errors::StorageError;
///
/// let error = StorageError::QuotaExceeded {
///     key: "moodEntries".to_string(),
///     size: 4096,
///     limit: 1024,
/// };
///
/// assert!(format!("{}", error).contains("quota"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend failed to read a key.
    #[error("Failed to read '{key}' from storage: {source}. Please check that the data directory is readable.")]
    Read {
        /// The storage key being read
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The backend failed to write a key. The previous value is left in place.
    #[error("Failed to write '{key}' to storage: {source}. Please check disk space and permissions of the data directory.")]
    Write {
        /// The storage key being written
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The value is larger than the backend accepts.
    #[error("Storage quota exceeded writing '{key}': {size} bytes requested, limit is {limit} bytes.")]
    QuotaExceeded {
        /// The storage key being written
        key: String,
        /// Size of the rejected value in bytes
        size: usize,
        /// Maximum size the backend accepts
        limit: usize,
    },

    /// The key cannot be mapped onto the backend.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// The stored value exists but is not an entry collection.
    #[error("Stored data under '{key}' is corrupted: {source}")]
    Corrupted {
        /// The storage key holding the unreadable value
        key: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The stored value was written by a newer schema than this build understands.
    #[error("Stored data under '{key}' uses schema version {found}, but this build only understands up to version {supported}. Please upgrade moodlog.")]
    UnsupportedVersion {
        /// The storage key holding the value
        key: String,
        /// Version tag found in the stored value
        found: u32,
        /// Highest version this build can read
        supported: u32,
    },

    /// The in-memory collection could not be serialized.
    #[error("Failed to encode entries for '{key}': {source}")]
    Encode {
        /// The storage key that was about to be written
        key: String,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents errors that can occur when locking the data directory against other
/// moodlog processes.
///
/// # Examples
///
/// ```
/// use moodlog::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/data/moodlog.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another moodlog process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process currently holds the lock.
    #[error("The mood store is currently being modified by another moodlog process: {path}. Please retry once it has finished.")]
    StoreBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check permissions of the data directory.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodlog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations outside the storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors raised by the persistence backend or while decoding its contents.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors related to the cross-process store lock.
    #[error("Store locking error: {0}")]
    Lock(#[from] LockError),

    /// A mood selection that does not match the catalog.
    #[error("Mood error: {0}")]
    Mood(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Mood("unknown".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
