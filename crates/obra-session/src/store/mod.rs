//! Key-value store backends.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::Path;

use obra_core::config::StorageConfig;
use obra_core::errors::ObraResult;
use obra_core::traits::KeyValueStore;

/// Open the store described by `config`: in memory when no path is set,
/// otherwise a SQLite file.
pub fn open_store(config: &StorageConfig) -> ObraResult<Box<dyn KeyValueStore>> {
    if config.is_in_memory() {
        Ok(Box::new(MemoryStore::new()))
    } else {
        Ok(Box::new(SqliteStore::open(Path::new(config.path.trim()))?))
    }
}
