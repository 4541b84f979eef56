use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvfigError {
    #[error("Environment not loaded — call .load() on the store before reading values")]
    NotLoaded,

    #[error("Failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to deserialize environment: {0}")]
    Deserialize(#[from] serde_json::Error),
}
