/// Client-local storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("serialization failed for key {key}: {message}")]
    Serialization { key: String, message: String },
}
