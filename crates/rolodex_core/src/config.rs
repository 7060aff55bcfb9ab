//! Runtime configuration for embedding processes.
//!
//! # Responsibility
//! - Hold the database path and logging settings core needs at startup.
//! - Load overrides from `ROLODEX_*` environment variables.
//!
//! # Invariants
//! - A loaded `log_level` is always one of `trace|debug|info|warn|error`.
//! - A loaded `log_dir` is always absolute.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "ROLODEX_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "ROLODEX_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "ROLODEX_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "rolodex.sqlite3";

/// Rejected configuration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
    EmptyDbPath,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(dir) => {
                write!(f, "log_dir must be an absolute path, got `{dir}`")
            }
            Self::EmptyDbPath => write!(f, "db_path cannot be empty"),
        }
    }
}

impl Error for ConfigError {}

/// Startup settings for core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the document store.
    pub db_path: PathBuf,
    /// Normalized log level.
    pub log_level: String,
    /// Rolling log directory; `None` leaves logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Loads config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads config through `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(db_path) = lookup(DB_PATH_ENV) {
            let trimmed = db_path.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyDbPath);
            }
            config.db_path = PathBuf::from(trimmed);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(&level)?.to_string();
        }
        if let Some(log_dir) = lookup(LOG_DIR_ENV) {
            config.log_dir = Some(normalize_log_dir(&log_dir)?);
        }

        Ok(config)
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ConfigError::UnsupportedLevel(other.to_string())),
    }
}

pub(crate) fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(ConfigError::RelativeLogDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}
