//! PinChain - trusted checkpoints for blockchain nodes
//!
//! A checkpoint pins a block height to a known block hash. Up to the highest
//! checkpoint the node refuses any history that disagrees with the table,
//! regardless of chain work.
//!
//! # Architecture
//!
//! ## Checkpoint Table
//! - [`checkpoints`] - The height-ordered store, conflict checks, and the
//!   alternative-block gate; seeding from compiled-in tables and loading
//!   from JSON hash files
//! - [`shared`] - Lock-guarded handle for concurrent readers and reloads
//!
//! ## Sources
//! - [`dns`] - TXT record resolution and majority agreement
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//! - [`hash`] - Block hash encoding
//! - [`network`] - Network variants

#![forbid(unsafe_code)]

// ============================================================================
// Checkpoint Table
// ============================================================================
pub mod checkpoints;
pub mod shared;

// ============================================================================
// Sources
// ============================================================================
pub mod dns;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
pub mod hash;
pub mod network;

pub use checkpoints::{BlockCheck, Checkpoint, Checkpoints};
pub use error::{CheckpointError, Result};
pub use hash::BlockHash;
pub use network::NetworkType;
pub use shared::SharedCheckpoints;
