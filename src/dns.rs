//! DNS TXT checkpoint records
//!
//! Checkpoints can be published as TXT records of the form
//! `"<decimal height>:<64 hex chars>"` under a fixed set of domains per
//! network. Resolution goes through the [`TxtResolver`] capability so that
//! loading can run without network access.
//!
//! A record set is only trusted when a strict majority of the domains that
//! answered returned the same set, and at least two domains answered.

use crate::error::{CheckpointError, Result};
use crate::hash::{hash_from_hex, BlockHash};
use crate::network::NetworkType;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Minimum number of answering domains before any record set is trusted.
pub const MIN_ANSWERING_DOMAINS: usize = 2;

pub const MAINNET_DNS_DOMAINS: &[&str] = &[
    "ck1.pinchain.network",
    "ck2.pinchain.network",
    "ck3.pinchain.network",
];

pub const TESTNET_DNS_DOMAINS: &[&str] = &[];

pub const STAGENET_DNS_DOMAINS: &[&str] = &[];

/// The TXT domains queried for `network`.
pub fn dns_domains(network: NetworkType) -> &'static [&'static str] {
    match network {
        NetworkType::Mainnet => MAINNET_DNS_DOMAINS,
        NetworkType::Testnet => TESTNET_DNS_DOMAINS,
        NetworkType::Stagenet => STAGENET_DNS_DOMAINS,
    }
}

/// Resolve a domain name to its TXT record strings.
pub trait TxtResolver: Send + Sync {
    fn resolve_txt(&self, domain: &str) -> Result<Vec<String>>;
}

/// In-memory resolver. Domains without an entry fail to resolve.
#[derive(Debug, Clone, Default)]
pub struct StaticTxtResolver {
    records: HashMap<String, Vec<String>>,
}

impl StaticTxtResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records<I, S>(mut self, domain: &str, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.records
            .insert(domain.to_string(), records.into_iter().map(Into::into).collect());
        self
    }
}

impl TxtResolver for StaticTxtResolver {
    fn resolve_txt(&self, domain: &str) -> Result<Vec<String>> {
        self.records
            .get(domain)
            .cloned()
            .ok_or_else(|| CheckpointError::Dns(format!("No TXT records for {}", domain)))
    }
}

#[cfg(feature = "dns")]
pub use hickory::HickoryTxtResolver;

#[cfg(feature = "dns")]
mod hickory {
    use super::TxtResolver;
    use crate::error::{CheckpointError, Result};
    use hickory_resolver::TokioResolver;
    use std::time::Duration;

    /// Hickory resolver using the host's system configuration
    /// (`/etc/resolv.conf` on unix), driven on a private current-thread runtime.
    ///
    /// Must not be used from inside another tokio runtime.
    pub struct HickoryTxtResolver {
        runtime: tokio::runtime::Runtime,
        resolver: TokioResolver,
        timeout: Duration,
    }

    impl HickoryTxtResolver {
        pub fn new(timeout: Duration) -> Result<Self> {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| CheckpointError::Dns(format!("Failed to start DNS runtime: {}", e)))?;

            let resolver = {
                let _guard = runtime.enter();
                TokioResolver::builder_tokio()
                    .map_err(|e| CheckpointError::Dns(format!("Failed to read system DNS config: {}", e)))?
                    .build()
            };

            Ok(Self {
                runtime,
                resolver,
                timeout,
            })
        }
    }

    impl TxtResolver for HickoryTxtResolver {
        fn resolve_txt(&self, domain: &str) -> Result<Vec<String>> {
            let lookup = self
                .runtime
                .block_on(async { tokio::time::timeout(self.timeout, self.resolver.txt_lookup(domain)).await })
                .map_err(|_| CheckpointError::Dns(format!("TXT lookup for {} timed out", domain)))?
                .map_err(|e| CheckpointError::Dns(format!("TXT lookup for {} failed: {}", domain, e)))?;

            Ok(lookup
                .iter()
                .map(|txt| {
                    txt.txt_data()
                        .iter()
                        .map(|chunk| String::from_utf8_lossy(&chunk[..]))
                        .collect::<String>()
                })
                .collect())
        }
    }
}

/// Resolver used for DNS checkpoints.
///
/// Falls back to an offline resolver, which answers nothing, when `use_dns`
/// is off or the system resolver cannot be set up. Either way DNS loading
/// then succeeds with no additions.
pub fn checkpoint_resolver(use_dns: bool, timeout: Duration) -> Box<dyn TxtResolver> {
    if use_dns {
        system_resolver(timeout)
    } else {
        Box::new(StaticTxtResolver::new())
    }
}

#[cfg(feature = "dns")]
fn system_resolver(timeout: Duration) -> Box<dyn TxtResolver> {
    match HickoryTxtResolver::new(timeout) {
        Ok(resolver) => Box::new(resolver),
        Err(e) => {
            warn!("DNS resolver unavailable, skipping DNS checkpoints: {}", e);
            Box::new(StaticTxtResolver::new())
        }
    }
}

#[cfg(not(feature = "dns"))]
fn system_resolver(_timeout: Duration) -> Box<dyn TxtResolver> {
    warn!("Built without DNS support; skipping DNS checkpoints");
    Box::new(StaticTxtResolver::new())
}

/// Query every domain and return the record set a strict majority of the
/// answering domains agree on.
///
/// Fails with [`CheckpointError::Dns`] when fewer than
/// [`MIN_ANSWERING_DOMAINS`] domains answer or no set reaches a majority.
pub fn load_txt_records(resolver: &dyn TxtResolver, domains: &[&str]) -> Result<Vec<String>> {
    let mut answers: Vec<Vec<String>> = Vec::with_capacity(domains.len());

    for domain in domains {
        debug!("Querying TXT records for {}", domain);
        match resolver.resolve_txt(domain) {
            Ok(mut records) if !records.is_empty() => {
                records.sort();
                records.dedup();
                answers.push(records);
            }
            Ok(_) => debug!("{} returned no TXT records", domain),
            Err(e) => warn!("Failed to resolve TXT records for {}: {}", domain, e),
        }
    }

    if answers.len() < MIN_ANSWERING_DOMAINS {
        return Err(CheckpointError::Dns(format!(
            "Only {} of {} checkpoint domains answered",
            answers.len(),
            domains.len()
        )));
    }

    let mut tally: Vec<(&Vec<String>, usize)> = Vec::new();
    for answer in &answers {
        match tally.iter_mut().find(|(set, _)| *set == answer) {
            Some((_, count)) => *count += 1,
            None => tally.push((answer, 1)),
        }
    }

    let (records, votes) = tally
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .ok_or_else(|| CheckpointError::Dns("No TXT answers to compare".to_string()))?;

    if votes * 2 <= answers.len() {
        return Err(CheckpointError::Dns(format!(
            "No majority among {} answering checkpoint domains",
            answers.len()
        )));
    }

    info!("{} of {} checkpoint domains agree on {} records", votes, answers.len(), records.len());
    Ok(records.clone())
}

/// Parse a `"<height>:<hash>"` record. Only the first `:` separates.
///
/// Returns the height, the decoded hash, and the hash text as it appeared.
pub fn parse_txt_record(record: &str) -> Option<(u64, BlockHash, &str)> {
    let (height, hash_str) = record.split_once(':')?;
    let height = height.trim_start().parse::<u64>().ok()?;
    let hash = hash_from_hex(hash_str).ok()?;
    Some((height, hash, hash_str))
}
