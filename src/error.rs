//! Error types for PinChain

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error("Malformed checkpoint hash: {0}")]
    MalformedHash(String),

    /// A height already pinned to `existing` was offered a different hash.
    #[error("Conflicting checkpoint at height {height}: have {existing}, got {proposed}")]
    ConflictingCheckpoint {
        height: u64,
        existing: String,
        proposed: String,
    },

    #[error("Malformed checkpoint file: {0}")]
    MalformedCheckpointFile(String),

    #[error("Checkpoint store is empty")]
    EmptyStore,

    #[error("DNS error: {0}")]
    Dns(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckpointError {
    /// Height the error refers to, if any.
    pub fn height(&self) -> Option<u64> {
        match self {
            CheckpointError::ConflictingCheckpoint { height, .. } => Some(*height),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CheckpointError {
    fn from(err: std::io::Error) -> Self {
        CheckpointError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CheckpointError {
    fn from(err: serde_json::Error) -> Self {
        CheckpointError::MalformedCheckpointFile(err.to_string())
    }
}

impl From<toml::de::Error> for CheckpointError {
    fn from(err: toml::de::Error) -> Self {
        CheckpointError::Config(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, CheckpointError>;
