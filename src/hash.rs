//! Block hash primitives for PinChain

use crate::error::{CheckpointError, Result};

/// Length of a block hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Type alias for a block hash, a fixed 32-byte digest.
pub type BlockHash = [u8; HASH_SIZE];

/// Convert a block hash to a hex string for display.
pub fn hash_to_hex(hash: &BlockHash) -> String {
    hex::encode(hash)
}

/// Convert a 64-character hex string to a block hash.
pub fn hash_from_hex(hex_str: &str) -> Result<BlockHash> {
    if hex_str.len() != HASH_SIZE * 2 {
        return Err(CheckpointError::MalformedHash(format!(
            "Hash must be {} hex characters, got {}",
            HASH_SIZE * 2,
            hex_str.len()
        )));
    }
    let mut hash = [0u8; HASH_SIZE];
    hex::decode_to_slice(hex_str, &mut hash)
        .map_err(|e| CheckpointError::MalformedHash(format!("Invalid hex hash: {}", e)))?;
    Ok(hash)
}
