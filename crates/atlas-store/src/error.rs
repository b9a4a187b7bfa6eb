use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage key '{0}' (expected [A-Za-z0-9_-]+)")]
    InvalidKey(String),

    #[error("storage read failed for '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage write failed for '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("stored favorites are malformed: {0}")]
    Malformed(String),

    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}
