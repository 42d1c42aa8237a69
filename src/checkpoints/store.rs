use crate::error::{CheckpointError, Result};
use crate::hash::{hash_from_hex, hash_to_hex, BlockHash};
use std::collections::BTreeMap;
use std::ops::Bound;
use tracing::{info, warn};

/// A trusted (height, hash) pair pinning canonical chain history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub height: u64,
    pub hash: BlockHash,
}

/// Outcome of checking a block against the checkpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCheck {
    /// False only when a checkpoint exists at the height and the hash differs.
    pub passed: bool,
    pub is_checkpoint: bool,
}

/// Height-ordered table of checkpoints.
///
/// At most one hash is kept per height, and an existing entry can only be
/// re-added with the identical hash. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkpoints {
    points: BTreeMap<u64, BlockHash>,
}

impl Checkpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `height` to the hash encoded in `hash_hex`.
    ///
    /// Returns `Ok(true)` when the point was inserted and `Ok(false)` when an
    /// identical point was already present. The store is left unchanged on error.
    pub fn add_checkpoint(&mut self, height: u64, hash_hex: &str) -> Result<bool> {
        let hash = hash_from_hex(hash_hex)?;
        self.add_checkpoint_hash(height, hash)
    }

    /// Same as [`Checkpoints::add_checkpoint`] for an already decoded hash.
    pub fn add_checkpoint_hash(&mut self, height: u64, hash: BlockHash) -> Result<bool> {
        if let Some(existing) = self.points.get(&height) {
            if *existing != hash {
                return Err(CheckpointError::ConflictingCheckpoint {
                    height,
                    existing: hash_to_hex(existing),
                    proposed: hash_to_hex(&hash),
                });
            }
            return Ok(false);
        }
        self.points.insert(height, hash);
        Ok(true)
    }

    /// True iff the store is non-empty and `height` is at or below the highest checkpoint.
    pub fn is_in_checkpoint_zone(&self, height: u64) -> bool {
        self.points
            .last_key_value()
            .is_some_and(|(max, _)| height <= *max)
    }

    /// Check a block hash against the checkpoint at `height`, if there is one.
    pub fn check_block(&self, height: u64, hash: &BlockHash) -> BlockCheck {
        let Some(expected) = self.points.get(&height) else {
            return BlockCheck {
                passed: true,
                is_checkpoint: false,
            };
        };

        let passed = expected == hash;
        if passed {
            info!("CHECKPOINT PASSED FOR HEIGHT {} {}", height, hash_to_hex(hash));
        } else {
            warn!(
                "CHECKPOINT FAILED FOR HEIGHT {}. EXPECTED HASH: {}, FETCHED HASH: {}",
                height,
                hash_to_hex(expected),
                hash_to_hex(hash)
            );
        }
        BlockCheck {
            passed,
            is_checkpoint: true,
        }
    }

    /// Whether a block at `block_height` may replace history when the chain
    /// tip is at `chain_height`.
    ///
    /// Height zero is never a valid target. Otherwise the candidate must be
    /// strictly above the nearest checkpoint at or below `chain_height`.
    pub fn is_alternative_block_allowed(&self, chain_height: u64, block_height: u64) -> bool {
        if block_height == 0 {
            return false;
        }

        match self
            .points
            .range((Bound::Unbounded, Bound::Included(chain_height)))
            .next_back()
        {
            // chain_height precedes the first checkpoint
            None => true,
            Some((checkpoint_height, _)) => *checkpoint_height < block_height,
        }
    }

    /// Highest pinned height. Fails with `EmptyStore` when there are no points.
    pub fn get_max_height(&self) -> Result<u64> {
        self.points
            .last_key_value()
            .map(|(height, _)| *height)
            .ok_or(CheckpointError::EmptyStore)
    }

    pub fn get_points(&self) -> &BTreeMap<u64, BlockHash> {
        &self.points
    }

    pub fn get(&self, height: u64) -> Option<&BlockHash> {
        self.points.get(&height)
    }

    pub fn iter(&self) -> impl Iterator<Item = Checkpoint> + '_ {
        self.points
            .iter()
            .map(|(height, hash)| Checkpoint { height: *height, hash: *hash })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Verify that every height shared with `other` carries the same hash.
    ///
    /// Pure check, neither store is modified. The first mismatch (in height
    /// order) is reported.
    pub fn check_for_conflicts(&self, other: &Checkpoints) -> Result<()> {
        for (height, theirs) in other.get_points() {
            if let Some(ours) = self.points.get(height) {
                if ours != theirs {
                    return Err(CheckpointError::ConflictingCheckpoint {
                        height: *height,
                        existing: hash_to_hex(ours),
                        proposed: hash_to_hex(theirs),
                    });
                }
            }
        }
        Ok(())
    }
}
