use crate::codec::EncodeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error opening file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("No record at position {0}")]
    RecordNotFound(u32),
}

pub type Result<T> = std::result::Result<T, ScorebookError>;
