//! Configuration management for the daybook application.
//!
//! Settings are read from environment variables with defaults, and paths are
//! expanded with `shellexpand` so `~` and `$VAR` references work.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_DIR`: Data directory holding `journal.db` (defaults to ~/.local/share/daybook)
//! - `DAYBOOK_EXPORT_DIR`: Directory PDF exports are written to (defaults to the data directory)
//! - `DAYBOOK_LOG_FORMAT`: `text` or `json` (defaults to `text`)
//! - `RUST_LOG`: Log filter directive (defaults to `info`)

use crate::constants::{
    DATABASE_FILE_NAME, DEFAULT_DATA_DIR, DEFAULT_LOG_LEVEL, ENV_VAR_DAYBOOK_DIR,
    ENV_VAR_DAYBOOK_EXPORT_DIR, ENV_VAR_DAYBOOK_LOG_FORMAT, ENV_VAR_RUST_LOG, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the daybook application.
///
/// # Examples
///
/// ```
/// use daybook::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/var/lib/daybook"),
///     export_dir: PathBuf::from("/tmp"),
///     log_format: "text".to_string(),
///     log_level: "info".to_string(),
/// };
/// assert_eq!(config.db_path(), PathBuf::from("/var/lib/daybook/journal.db"));
/// ```
pub struct Config {
    /// Directory holding the SQLite database.
    pub data_dir: PathBuf,

    /// Directory PDF exports are written to.
    pub export_dir: PathBuf,

    /// Log output format, `text` or `json`.
    pub log_format: String,

    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("export_dir", &REDACTED_PLACEHOLDER)
            .field("log_format", &self.log_format)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::new(),
            export_dir: PathBuf::new(),
            log_format: LOG_FORMAT_TEXT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn expand(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path '{}': {}", raw, e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Loads configuration from environment variables with defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a path cannot be expanded, for example when
    /// it references an undefined variable.
    pub fn load() -> AppResult<Self> {
        let data_dir_raw =
            non_empty_var(ENV_VAR_DAYBOOK_DIR).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let data_dir = expand(&data_dir_raw)?;

        let export_dir = match non_empty_var(ENV_VAR_DAYBOOK_EXPORT_DIR) {
            Some(raw) => expand(&raw)?,
            None => data_dir.clone(),
        };

        let log_format = non_empty_var(ENV_VAR_DAYBOOK_LOG_FORMAT)
            .map(|value| value.to_lowercase())
            .unwrap_or_else(|| LOG_FORMAT_TEXT.to_string());

        let log_level =
            non_empty_var(ENV_VAR_RUST_LOG).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            data_dir,
            export_dir,
            log_format,
            log_level,
        })
    }

    /// Path of the SQLite database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if either directory is empty or relative, or
    /// if the log format is neither `text` nor `json`.
    ///
    /// # Examples
    ///
    /// ```
    /// use daybook::Config;
    /// use std::path::PathBuf;
    ///
    /// let mut config = Config {
    ///     data_dir: PathBuf::from("/data"),
    ///     export_dir: PathBuf::from("/exports"),
    ///     log_format: "json".to_string(),
    ///     log_level: "debug".to_string(),
    /// };
    /// assert!(config.validate().is_ok());
    ///
    /// config.log_format = "yaml".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        for (label, dir) in [("Data", &self.data_dir), ("Export", &self.export_dir)] {
            if dir.as_os_str().is_empty() {
                return Err(AppError::Config(format!(
                    "{} directory path is empty",
                    label
                )));
            }
            if !dir.is_absolute() {
                return Err(AppError::Config(format!(
                    "{} directory must be an absolute path",
                    label
                )));
            }
        }

        if self.log_format != LOG_FORMAT_TEXT && self.log_format != LOG_FORMAT_JSON {
            return Err(AppError::Config(format!(
                "Unknown log format '{}', expected '{}' or '{}'",
                self.log_format, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        env::remove_var(ENV_VAR_DAYBOOK_DIR);
        env::remove_var(ENV_VAR_DAYBOOK_EXPORT_DIR);
        env::remove_var(ENV_VAR_DAYBOOK_LOG_FORMAT);
        env::remove_var(ENV_VAR_RUST_LOG);
    }

    fn absolute(dir: &str) -> Config {
        Config {
            data_dir: PathBuf::from(dir),
            export_dir: PathBuf::from(dir),
            ..Config::default()
        }
    }

    #[test]
    fn test_debug_impl_redacts_paths() {
        let config = absolute("/home/username/private/journal");

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private/journal"));
        assert!(debug_output.contains("text"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_format, "text");
        assert_eq!(config.log_level, "info");
        assert!(config.data_dir.as_os_str().is_empty());
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        env::set_var(ENV_VAR_DAYBOOK_DIR, temp_dir.path());

        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.data_dir, temp_dir.path());
        assert_eq!(config.export_dir, temp_dir.path());
        assert_eq!(config.db_path(), temp_dir.path().join("journal.db"));
    }

    #[test]
    #[serial]
    fn test_load_with_separate_export_dir() {
        clear_env();
        let data = tempdir().unwrap();
        let exports = tempdir().unwrap();
        env::set_var(ENV_VAR_DAYBOOK_DIR, data.path());
        env::set_var(ENV_VAR_DAYBOOK_EXPORT_DIR, exports.path());

        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.data_dir, data.path());
        assert_eq!(config.export_dir, exports.path());
    }

    #[test]
    #[serial]
    fn test_load_defaults_expand_home() {
        clear_env();
        let orig_home = env::var("HOME").ok();
        env::set_var("HOME", "/home/tester");

        let config = Config::load().unwrap();

        if let Some(home) = orig_home {
            env::set_var("HOME", home);
        }
        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/tester/.local/share/daybook")
        );
        assert_eq!(config.log_format, "text");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_load_log_settings_from_env() {
        clear_env();
        env::set_var(ENV_VAR_DAYBOOK_DIR, "/tmp/daybook-config-test");
        env::set_var(ENV_VAR_DAYBOOK_LOG_FORMAT, "JSON");
        env::set_var(ENV_VAR_RUST_LOG, "daybook=debug");

        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.log_format, "json");
        assert_eq!(config.log_level, "daybook=debug");
    }

    #[test]
    #[serial]
    fn test_load_with_undefined_variable_fails() {
        clear_env();
        env::remove_var("DAYBOOK_SURELY_UNDEFINED");
        env::set_var(ENV_VAR_DAYBOOK_DIR, "$DAYBOOK_SURELY_UNDEFINED/journal");

        let result = Config::load();
        clear_env();

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("Failed to expand path")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_relative_and_empty_paths() {
        let relative = absolute("relative/path");
        match relative.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("absolute")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        let empty = Config::default();
        match empty.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_log_format() {
        let mut config = absolute("/data");
        assert!(config.validate().is_ok());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
