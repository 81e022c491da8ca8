//! Configuration module for docbrowse
//!
//! Two layers of configuration exist:
//! - `Settings`: connection and logging settings read (never written) from
//!   optional TOML files, the user-wide one first and `./docbrowse.toml`
//!   on top of it
//! - `BrowseOptions`: the `browse` command's flags, threaded explicitly
//!   into the browse session

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default number of documents per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Settings file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "docbrowse.toml";

/// Options of the `browse` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseOptions {
    /// Render single documents as a table instead of key/value lines
    pub table: bool,
    /// Documents fetched per page (at least 1)
    pub page_size: usize,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            table: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BrowseOptions {
    /// Create options, rejecting a zero page size
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `page_size` is zero.
    pub fn new(table: bool, page_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::Message("page size must be at least 1".to_string()));
        }
        Ok(Self { table, page_size })
    }
}

/// Application settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Path of the sled database to browse
    pub database: PathBuf,

    /// Maximum level of diagnostics written to stderr
    pub log_level: String,

    /// Pause after an empty filter preview, in milliseconds
    pub empty_preview_pause_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from("docbrowse.db"),
            log_level: "warn".to_string(),
            empty_preview_pause_ms: 2000,
        }
    }
}

impl Settings {
    /// Get the path to the user-wide settings file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("docbrowse").join("config.toml"))
    }

    /// Load settings from the user-wide file and `./docbrowse.toml`
    ///
    /// Missing files are skipped; the local file wins on conflicts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut sources = Vec::new();
        if let Ok(path) = Self::config_path() {
            sources.push(path);
        }
        sources.push(PathBuf::from(LOCAL_CONFIG_FILE));
        Self::load_from(&sources)
    }

    /// Load settings from `sources`, later files overriding earlier ones
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present file cannot be read or parsed.
    pub fn load_from(sources: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        for path in sources {
            builder = builder.add_source(
                File::from(path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        builder.build()?.try_deserialize()
    }

    /// Parsed log level
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `log_level` is not a tracing level name.
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Message(format!("Invalid log level '{}'", self.log_level)))
    }

    /// Pause after an empty filter preview
    #[must_use]
    pub const fn empty_preview_pause(&self) -> Duration {
        Duration::from_millis(self.empty_preview_pause_ms)
    }
}
