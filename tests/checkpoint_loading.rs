//! Integration tests for building the checkpoint table from files and DNS

use pinchain::checkpoints::{Checkpoints, MAINNET_CHECKPOINTS};
use pinchain::dns::{StaticTxtResolver, MAINNET_DNS_DOMAINS};
use pinchain::error::CheckpointError;
use pinchain::network::NetworkType;
use pinchain::shared::build_checkpoints;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to derive a distinct block hash for a height
fn block_hash_hex(height: u64) -> String {
    hex::encode(Sha256::digest(height.to_le_bytes()))
}

/// Helper to write a hash file with the given (height, hash) lines
fn write_hash_file(dir: &Path, lines: &[(u64, String)]) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let hashlines: Vec<serde_json::Value> = lines
        .iter()
        .map(|(height, hash)| serde_json::json!({ "height": height, "hash": hash }))
        .collect();
    let path = dir.join("checkpoints.json");
    std::fs::write(&path, serde_json::json!({ "hashlines": hashlines }).to_string())?;
    Ok(path)
}

fn store_10_20_30() -> Checkpoints {
    let mut store = Checkpoints::new();
    for height in [10, 20, 30] {
        store.add_checkpoint(height, &block_hash_hex(height)).unwrap();
    }
    store
}

/// Resolver where every mainnet domain publishes `records`
fn mainnet_resolver(records: &[String]) -> StaticTxtResolver {
    MAINNET_DNS_DOMAINS
        .iter()
        .fold(StaticTxtResolver::new(), |resolver, domain| {
            resolver.with_records(domain, records.to_vec())
        })
}

#[test]
fn test_missing_file_adds_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let mut store = store_10_20_30();

    assert!(store.load_from_file(&temp_dir.path().join("nope.json"))?);
    assert_eq!(store, store_10_20_30());
    Ok(())
}

#[test]
fn test_file_only_extends_past_max_height() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let mut store = store_10_20_30();

    // 25 and 30 are at or below the max and must be ignored even though 30
    // carries a different hash; 40 extends the table.
    let path = write_hash_file(
        temp_dir.path(),
        &[
            (25, block_hash_hex(25)),
            (30, "ff".repeat(32)),
            (40, block_hash_hex(40)),
        ],
    )?;

    assert!(store.load_from_file(&path)?);
    assert_eq!(store.len(), 4);
    assert!(store.get(25).is_none());
    assert_eq!(hex::encode(store.get(30).unwrap()), block_hash_hex(30));
    assert_eq!(store.get_max_height()?, 40);
    Ok(())
}

#[test]
fn test_file_into_empty_store_accepts_everything() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_hash_file(temp_dir.path(), &[(1, block_hash_hex(1)), (7, block_hash_hex(7))])?;

    let mut store = Checkpoints::new();
    store.load_from_file(&path)?;
    assert_eq!(store.len(), 2);
    Ok(())
}

#[test]
fn test_malformed_file_aborts_load() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("checkpoints.json");
    std::fs::write(&path, r#"{ "hashlines": [ { "height": 40 } ] }"#)?;

    let mut store = store_10_20_30();
    let err = store.load_from_file(&path).unwrap_err();
    assert!(matches!(err, CheckpointError::MalformedCheckpointFile(_)));
    assert_eq!(store, store_10_20_30());
    Ok(())
}

#[test]
fn test_bad_hash_in_file_applies_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_hash_file(
        temp_dir.path(),
        &[(40, block_hash_hex(40)), (50, "not hex".to_string())],
    )?;

    let mut store = store_10_20_30();
    let err = store.load_from_file(&path).unwrap_err();
    assert!(matches!(err, CheckpointError::MalformedHash(_)));
    assert_eq!(store, store_10_20_30());
    Ok(())
}

#[test]
fn test_duplicate_conflicting_heights_in_file_fail() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_hash_file(
        temp_dir.path(),
        &[(40, block_hash_hex(40)), (40, block_hash_hex(41))],
    )?;

    let mut store = store_10_20_30();
    let err = store.load_from_file(&path).unwrap_err();
    assert_eq!(err.height(), Some(40));
    assert_eq!(store.get_max_height()?, 30);
    Ok(())
}

#[test]
fn test_dns_skips_malformed_records() -> Result<(), Box<dyn std::error::Error>> {
    let records = vec![
        "abc:deadbeef".to_string(),
        format!("40:{}", block_hash_hex(40)),
        "50:deadbeef".to_string(),
        format!("60:{}", block_hash_hex(60)),
    ];
    let resolver = mainnet_resolver(&records);

    let mut store = store_10_20_30();
    assert!(store.load_from_dns(NetworkType::Mainnet, &resolver)?);
    assert_eq!(store.len(), 5);
    assert!(store.get(40).is_some());
    assert!(store.get(50).is_none());
    assert!(store.get(60).is_some());
    Ok(())
}

#[test]
fn test_dns_may_backfill_below_max_height() -> Result<(), Box<dyn std::error::Error>> {
    let resolver = mainnet_resolver(&[format!("15:{}", block_hash_hex(15))]);

    let mut store = store_10_20_30();
    store.load_from_dns(NetworkType::Mainnet, &resolver)?;
    assert!(store.get(15).is_some());
    Ok(())
}

#[test]
fn test_dns_conflict_is_an_error() {
    let resolver = mainnet_resolver(&[format!("20:{}", "ee".repeat(32))]);

    let mut store = store_10_20_30();
    let err = store.load_from_dns(NetworkType::Mainnet, &resolver).unwrap_err();
    assert_eq!(err.height(), Some(20));
    assert_eq!(store, store_10_20_30());
}

#[test]
fn test_dns_failure_still_reports_success() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = store_10_20_30();

    // No domain resolves at all.
    assert!(store.load_from_dns(NetworkType::Mainnet, &StaticTxtResolver::new())?);
    // Empty domain lists.
    assert!(store.load_from_dns(NetworkType::Testnet, &mainnet_resolver(&[]))?);
    assert!(store.load_from_dns(NetworkType::Stagenet, &StaticTxtResolver::new())?);

    assert_eq!(store, store_10_20_30());
    Ok(())
}

#[test]
fn test_load_new_checkpoints() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_hash_file(temp_dir.path(), &[(40, block_hash_hex(40))])?;
    let resolver = mainnet_resolver(&[format!("50:{}", block_hash_hex(50))]);

    let mut without_dns = store_10_20_30();
    assert!(without_dns.load_new_checkpoints(&path, NetworkType::Mainnet, false, &resolver)?);
    assert_eq!(without_dns.get_max_height()?, 40);

    let mut with_dns = store_10_20_30();
    assert!(with_dns.load_new_checkpoints(&path, NetworkType::Mainnet, true, &resolver)?);
    assert_eq!(with_dns.get_max_height()?, 50);
    Ok(())
}

#[test]
fn test_load_new_checkpoints_tracks_file_when_dns_unreachable() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = write_hash_file(temp_dir.path(), &[(40, block_hash_hex(40))])?;

    // No mainnet domain resolves, yet the combined load succeeds.
    let mut store = store_10_20_30();
    assert!(store.load_new_checkpoints(&path, NetworkType::Mainnet, true, &StaticTxtResolver::new())?);
    assert_eq!(store.len(), 4);
    assert_eq!(store.get_max_height()?, 40);
    Ok(())
}

#[test]
fn test_load_new_checkpoints_file_failure_skips_dns()-> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("checkpoints.json");
    std::fs::write(&path, "[]")?;
    let resolver = mainnet_resolver(&[format!("50:{}", block_hash_hex(50))]);

    let mut store = store_10_20_30();
    assert!(store
        .load_new_checkpoints(&path, NetworkType::Mainnet, true, &resolver)
        .is_err());
    assert!(store.get(50).is_none());
    Ok(())
}

#[test]
fn test_build_checkpoints_for_mainnet() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let (max_default, _) = MAINNET_CHECKPOINTS[MAINNET_CHECKPOINTS.len() - 1];
    let path = write_hash_file(
        temp_dir.path(),
        &[(1, block_hash_hex(1)), (max_default + 1000, block_hash_hex(max_default + 1000))],
    )?;

    let store = build_checkpoints(NetworkType::Mainnet, &path, false, &StaticTxtResolver::new())?;
    assert_eq!(store.len(), MAINNET_CHECKPOINTS.len() + 1);
    assert_eq!(store.get_max_height()?, max_default + 1000);
    // The seeded hash at height 1 survived the conflicting file entry.
    assert_eq!(hex::encode(store.get(1).unwrap()), MAINNET_CHECKPOINTS[0].1);
    Ok(())
}

#[test]
fn test_dns_checkpoints_agree_reports_conflicts() {
    let store = Checkpoints::with_defaults(NetworkType::Mainnet).unwrap();
    let (height, hash) = MAINNET_CHECKPOINTS[1];

    let agreeing = mainnet_resolver(&[format!("{}:{}", height, hash)]);
    assert_eq!(store.dns_checkpoints_agree(NetworkType::Mainnet, &agreeing), Ok(()));

    let conflicting = mainnet_resolver(&[format!("{}:{}", height, "00".repeat(32))]);
    let err = store
        .dns_checkpoints_agree(NetworkType::Mainnet, &conflicting)
        .unwrap_err();
    assert_eq!(err.height(), Some(height));
}
