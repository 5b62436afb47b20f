//! Constants used throughout the application.
//!
//! This module contains all constants used in moodlog, organized into logical
//! groups. Having constants centralized makes them easier to find, modify, and
//! reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodlog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Record one mood a day, with an optional note";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_MOODLOG_DIR: &str = "MOODLOG_DIR";
/// Environment variable that switches the store to strict corruption handling.
pub const ENV_VAR_MOODLOG_STRICT: &str = "MOODLOG_STRICT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for the data directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/moodlog";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// The single key under which the whole entry collection is stored.
pub const ENTRIES_STORAGE_KEY: &str = "moodEntries";
/// Suffix of the key a corrupted blob is copied to before being overwritten.
pub const CORRUPT_BACKUP_SUFFIX: &str = ".corrupt";
/// Schema version written into every stored envelope.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;
/// File extension for stored blobs in the file backend.
pub const BLOB_FILE_EXTENSION: &str = "json";
/// Name of the advisory lock file inside the data directory.
pub const LOCK_FILE_NAME: &str = "moodlog.lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Date format used for day labels older than yesterday.
pub const DAY_LABEL_DATE_FORMAT: &str = "%-d %B %Y";
/// Time format used when printing an entry's time of day.
pub const ENTRY_TIME_FORMAT: &str = "%H:%M";
/// Shown in the history in place of an empty note.
pub const NO_NOTE_PLACEHOLDER: &str = "(no note)";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodlog";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
