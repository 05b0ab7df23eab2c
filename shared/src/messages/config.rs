//! Tracker configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Where checklists live and how loudly the tracker logs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    pub store_file: String,
    pub log_level: String,
}

impl TrackerConfig {
    const LOG_LEVELS: [&'static str; 5] = ["trace", "debug", "info", "warn", "error"];

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Full path of the checklist document
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.store_file)
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.store_file.trim().is_empty() {
            return Err(SharedError::InvalidConfig {
                field: "store_file".to_string(),
                value: self.store_file.clone(),
            });
        }
        if !Self::LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(SharedError::InvalidConfig {
                field: "log_level".to_string(),
                value: self.log_level.clone(),
            });
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            store_file: "checklists.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}
