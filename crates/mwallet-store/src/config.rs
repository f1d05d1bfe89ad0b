//! Multi-wallet configuration.
//!
//! Provides [`MultiWalletConfig`] with defaults for the root directory,
//! database name and logging. [`MultiWalletConfig::load`] layers an optional
//! config file and `MWALLET_*` environment variables over those defaults.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use mwallet_core::constants::{LOG_FILE_NAME, WALLETS_DB_NAME};
use serde::Deserialize;

/// Prefix of the environment variables read by [`MultiWalletConfig::load`],
/// e.g. `MWALLET_LOG_LEVEL=debug`.
pub const ENV_PREFIX: &str = "MWALLET";

/// Configuration for a multi-wallet instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MultiWalletConfig {
    /// Root directory holding the database, the log file and wallet data.
    pub root_dir: PathBuf,
    /// Database directory name inside `root_dir`.
    pub db_name: String,
    /// Log level filter string (e.g. "info", "debug", "mwallet_store=trace").
    pub log_level: String,
    /// `"json"` for structured output; anything else is human-readable text.
    pub log_format: String,
}

impl Default for MultiWalletConfig {
    fn default() -> Self {
        let root_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mwallet");

        Self {
            root_dir,
            db_name: WALLETS_DB_NAME.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl MultiWalletConfig {
    /// Load the configuration: defaults, then `file` if given and present,
    /// then `MWALLET_*` environment variables.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(
        file: Option<&Path>,
        env: Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder.add_source(env).build()?.try_deserialize()
    }

    /// Path to the RocksDB wallets database.
    pub fn db_path(&self) -> PathBuf {
        self.root_dir.join(&self.db_name)
    }

    /// Path to the log file.
    pub fn log_file_path(&self) -> PathBuf {
        self.root_dir.join(LOG_FILE_NAME)
    }
}
