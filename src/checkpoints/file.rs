//! JSON hash file schema.
//!
//! ```json
//! { "hashlines": [ { "height": 1000, "hash": "<64 hex chars>" } ] }
//! ```

use crate::error::{CheckpointError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLine {
    pub height: u64,
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashFile {
    pub hashlines: Vec<HashLine>,
}

impl HashFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a hash file. Returns `Ok(None)` if `path` does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CheckpointError::MalformedCheckpointFile(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Self::from_json(&contents)
            .map(Some)
            .map_err(|e| match e {
                CheckpointError::MalformedCheckpointFile(msg) => CheckpointError::MalformedCheckpointFile(
                    format!("{}: {}", path.display(), msg),
                ),
                other => other,
            })
    }
}
