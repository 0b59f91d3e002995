//! Runtime configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | `POS_DATA_DIR` | `./pos-data` | Directory holding the store file |
//! | `POS_LOG_LEVEL` | `info` | Log level filter |

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the store database file
    pub data_dir: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("POS_DATA_DIR").unwrap_or_else(|_| "./pos-data".into()),
            log_level: std::env::var("POS_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override the data directory; used by tests and embedders.
    pub fn with_data_dir(mut self, data_dir: impl Into<String>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Path of the redb store file
    pub fn store_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("pos.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
