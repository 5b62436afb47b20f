//! Configuration management for the moodlog application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MOODLOG_DIR`: Path to the data directory (defaults to ~/.local/share/moodlog)
//! - `MOODLOG_STRICT`: `1`/`true` to fail on corrupted data instead of ignoring it
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_MOODLOG_DIR, ENV_VAR_MOODLOG_STRICT,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use crate::store::CorruptionPolicy;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the moodlog application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodlog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     strict: false,
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory holding the stored entries and the lock file.
    ///
    /// Loaded from `MOODLOG_DIR` with a fallback to `~/.local/share/moodlog`.
    pub data_dir: PathBuf,

    /// Whether corrupted stored data is an error rather than an empty history.
    pub strict: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("strict", &self.strict)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `MOODLOG_STRICT` is set to something other than a boolean
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use moodlog::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded config: {:?}", config),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_MOODLOG_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());
        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let strict = match env::var(ENV_VAR_MOODLOG_STRICT) {
            Ok(value) => Config::parse_flag(&value)?,
            Err(_) => false,
        };

        Ok(Config { data_dir, strict })
    }

    fn parse_flag(value: &str) -> AppResult<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "" | "0" | "false" | "no" | "off" => Ok(false),
            other => Err(AppError::Config(format!(
                "{} must be a boolean (1/0, true/false), got '{}'",
                ENV_VAR_MOODLOG_STRICT, other
            ))),
        }
    }

    /// The corruption policy the entry store should run with.
    pub fn corruption_policy(&self) -> CorruptionPolicy {
        if self.strict {
            CorruptionPolicy::Fail
        } else {
            CorruptionPolicy::TreatAsEmpty
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Data directory must be an absolute path"
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    /// Restores the moodlog environment variables when dropped.
    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn clear() -> Self {
            let keys = [ENV_VAR_MOODLOG_DIR, ENV_VAR_MOODLOG_STRICT, ENV_VAR_HOME];
            let saved = keys.iter().map(|k| (*k, env::var(k).ok())).collect();
            env::remove_var(ENV_VAR_MOODLOG_DIR);
            env::remove_var(ENV_VAR_MOODLOG_STRICT);
            EnvGuard { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn test_debug_impl_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/home/username/private/moods"),
            strict: false,
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private/moods"));
    }

    #[test]
    #[serial]
    fn test_load_defaults_under_home() {
        let _guard = EnvGuard::clear();
        env::set_var(ENV_VAR_HOME, "/home/tester");

        let config = Config::load().unwrap();

        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/tester/.local/share/moodlog")
        );
        assert!(!config.strict);
        assert_eq!(config.corruption_policy(), CorruptionPolicy::TreatAsEmpty);
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        let _guard = EnvGuard::clear();
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        env::set_var(ENV_VAR_MOODLOG_DIR, &dir_path);
        let config = Config::load().unwrap();

        assert_eq!(config.data_dir, PathBuf::from(dir_path));
    }

    #[test]
    #[serial]
    fn test_load_expands_tilde() {
        let _guard = EnvGuard::clear();
        env::set_var(ENV_VAR_HOME, "/home/tester");
        env::set_var(ENV_VAR_MOODLOG_DIR, "~/moods");

        let config = Config::load().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/home/tester/moods"));
    }

    #[test]
    #[serial]
    fn test_load_strict_flag() {
        let _guard = EnvGuard::clear();
        env::set_var(ENV_VAR_MOODLOG_DIR, "/tmp/moods");

        env::set_var(ENV_VAR_MOODLOG_STRICT, "TRUE");
        let config = Config::load().unwrap();
        assert!(config.strict);
        assert_eq!(config.corruption_policy(), CorruptionPolicy::Fail);

        env::set_var(ENV_VAR_MOODLOG_STRICT, "0");
        assert!(!Config::load().unwrap().strict);

        env::set_var(ENV_VAR_MOODLOG_STRICT, "maybe");
        match Config::load() {
            Err(AppError::Config(msg)) => assert!(msg.contains("must be a boolean")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_data_dir() {
        let config = Config {
            data_dir: PathBuf::from(""),
            strict: false,
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("Data directory path is empty"));
            }
            _ => panic!("Expected Config error about empty data directory"),
        }
    }

    #[test]
    fn test_validate_relative_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
            strict: false,
        };

        match config.validate() {
            Err(AppError::Config(message)) => {
                assert!(message.contains("must be an absolute path"));
            }
            _ => panic!("Expected Config error about relative path"),
        }
    }
}
