use serde::{Deserialize, Serialize};

use super::defaults;

/// Client-local storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file backing the key-value store. Empty means in-memory.
    pub path: String,
}

impl StorageConfig {
    /// Whether the store should live only in memory.
    pub fn is_in_memory(&self) -> bool {
        self.path.trim().is_empty()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_STORAGE_PATH.to_string(),
        }
    }
}
