//! Store configuration.
//!
//! Loaded from the optional `config/gudang.toml` (section `[store]`) and from
//! `GUDANG__STORE__*` environment variables, environment winning. Every field has
//! a default, so an empty environment yields a working configuration.
//!
//! ```toml
//! [store]
//! data_dir = "data"
//! storage_key = "GUDANG_JAYA_DB"
//! low_stock_threshold = 5
//! ```

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config/gudang.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the snapshot file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Slot key; the file is `<data_dir>/<storage_key>.json`.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    #[serde(default = "default_notice_capacity")]
    pub notice_capacity: usize,
    /// Items at or below this quantity count as low stock on the dashboard.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_storage_key() -> String {
    "GUDANG_JAYA_DB".to_string()
}

fn default_channel_capacity() -> usize {
    32
}

fn default_notice_capacity() -> usize {
    64
}

fn default_low_stock_threshold() -> u32 {
    10
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            channel_capacity: default_channel_capacity(),
            notice_capacity: default_notice_capacity(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl StoreConfig {
    /// Loads from [`DEFAULT_CONFIG_FILE`] and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads from the given file (if it exists) and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix("GUDANG").separator("__"))
            .build()?;

        match settings.get::<StoreConfig>("store") {
            Ok(config) => Ok(config),
            // No [store] section anywhere: all defaults.
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Store configuration could not be loaded from file or environment: {e}"
            ))),
        }
    }

    /// Path of the snapshot file the store reads and writes.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.storage_key))
    }
}
