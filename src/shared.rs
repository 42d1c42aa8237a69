//! Thread-safe checkpoint handle for the block acceptance path
//!
//! Validation code reads through a shared lock. A reload builds a fresh
//! store without holding the lock and swaps it in only after it has been
//! checked against the current one.

use crate::checkpoints::{BlockCheck, Checkpoints};
use crate::dns::TxtResolver;
use crate::error::Result;
use crate::hash::BlockHash;
use crate::network::NetworkType;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Build a store the way a node does at startup: seeds, then the hash file,
/// then DNS when `use_dns` is set.
pub fn build_checkpoints(
    network: NetworkType,
    file: &Path,
    use_dns: bool,
    resolver: &dyn TxtResolver,
) -> Result<Checkpoints> {
    let mut checkpoints = Checkpoints::with_defaults(network)?;
    checkpoints.load_new_checkpoints(file, network, use_dns, resolver)?;
    Ok(checkpoints)
}

#[derive(Debug, Clone, Default)]
pub struct SharedCheckpoints {
    inner: Arc<RwLock<Checkpoints>>,
}

impl SharedCheckpoints {
    pub fn new(checkpoints: Checkpoints) -> Self {
        Self {
            inner: Arc::new(RwLock::new(checkpoints)),
        }
    }

    pub fn is_in_checkpoint_zone(&self, height: u64) -> bool {
        self.inner.read().is_in_checkpoint_zone(height)
    }

    pub fn check_block(&self, height: u64, hash: &BlockHash) -> BlockCheck {
        self.inner.read().check_block(height, hash)
    }

    pub fn is_alternative_block_allowed(&self, chain_height: u64, block_height: u64) -> bool {
        self.inner.read().is_alternative_block_allowed(chain_height, block_height)
    }

    pub fn max_height(&self) -> Option<u64> {
        self.inner.read().get_max_height().ok()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current table.
    pub fn snapshot(&self) -> Checkpoints {
        self.inner.read().clone()
    }

    /// Rebuild from seeds, file and DNS, then replace the current table.
    ///
    /// The current table is kept if loading fails or if the fresh table
    /// disagrees with any point already trusted.
    pub fn reload(
        &self,
        network: NetworkType,
        file: &Path,
        use_dns: bool,
        resolver: &dyn TxtResolver,
    ) -> Result<()> {
        let fresh = build_checkpoints(network, file, use_dns, resolver)?;

        let mut current = self.inner.write();
        current.check_for_conflicts(&fresh)?;
        // Keep points the fresh build no longer has.
        let mut merged = fresh;
        for checkpoint in current.iter() {
            merged.add_checkpoint_hash(checkpoint.height, checkpoint.hash)?;
        }
        info!(
            "Reloaded checkpoints: {} -> {} points",
            current.len(),
            merged.len()
        );
        *current = merged;
        Ok(())
    }
}
