use crate::checkpoints::defaults::default_checkpoints;
use crate::checkpoints::file::HashFile;
use crate::checkpoints::store::Checkpoints;
use crate::dns::{dns_domains, load_txt_records, parse_txt_record, TxtResolver};
use crate::error::Result;
use crate::network::NetworkType;
use std::path::Path;
use tracing::{debug, error, info, warn};

impl Checkpoints {
    /// Build a store holding the compiled-in checkpoints for `network`.
    pub fn with_defaults(network: NetworkType) -> Result<Self> {
        let mut checkpoints = Self::new();
        checkpoints.seed_defaults(network)?;
        Ok(checkpoints)
    }

    /// Install the compiled-in checkpoint table for `network`.
    pub fn seed_defaults(&mut self, network: NetworkType) -> Result<()> {
        for (height, hash) in default_checkpoints(network) {
            self.add_checkpoint(*height, hash)?;
        }
        debug!("Seeded {} default checkpoints for {}", self.len(), network);
        Ok(())
    }

    /// Add checkpoints from a JSON hash file.
    ///
    /// A missing file is not an error. Only records above the current max
    /// height are applied; nothing is applied if any record fails.
    pub fn load_from_file(&mut self, path: &Path) -> Result<bool> {
        let Some(hash_file) = HashFile::read(path).inspect_err(|e| {
            error!("Error loading checkpoints from {}: {}", path.display(), e);
        })?
        else {
            info!("Blockchain checkpoints file not found at {}", path.display());
            return Ok(true);
        };

        info!("Adding checkpoints from blockchain hashfile {}", path.display());
        let prev_max_height = self.get_max_height().ok();
        match prev_max_height {
            Some(height) => info!("Hard-coded max checkpoint height is {}", height),
            None => info!("No checkpoints known yet, accepting every height from hashfile"),
        }

        let mut staged = self.clone();
        for line in &hash_file.hashlines {
            if prev_max_height.is_some_and(|max| line.height <= max) {
                debug!("Ignoring checkpoint height {}", line.height);
                continue;
            }
            debug!("Adding checkpoint height {}, hash={}", line.height, line.hash);
            staged.add_checkpoint(line.height, &line.hash)?;
        }

        *self = staged;
        Ok(true)
    }

    /// Add checkpoints published as DNS TXT records for `network`.
    ///
    /// Always reports success when the resolution itself fails, including
    /// when `network` has no domains. Malformed records are skipped; a
    /// conflicting record is an error.
    pub fn load_from_dns(&mut self, network: NetworkType, resolver: &dyn TxtResolver) -> Result<bool> {
        self.load_from_dns_domains(dns_domains(network), resolver)
    }

    /// [`Checkpoints::load_from_dns`] against an explicit domain list.
    pub fn load_from_dns_domains(&mut self, domains: &[&str], resolver: &dyn TxtResolver) -> Result<bool> {
        let records = match load_txt_records(resolver, domains) {
            Ok(records) => records,
            Err(e) => {
                // Resolution failures do not fail the load.
                warn!("DNS checkpoints unavailable: {}", e);
                return Ok(true);
            }
        };

        let mut staged = self.clone();
        for record in &records {
            let Some((height, _, hash_str)) = parse_txt_record(record) else {
                debug!("Skipping malformed DNS checkpoint record {:?}", record);
                continue;
            };
            staged.add_checkpoint(height, hash_str)?;
        }

        *self = staged;
        Ok(true)
    }

    /// Load the hash file, then DNS checkpoints when `use_dns` is set.
    ///
    /// A file failure short-circuits; DNS is not queried in that case.
    pub fn load_new_checkpoints(
        &mut self,
        path: &Path,
        network: NetworkType,
        use_dns: bool,
        resolver: &dyn TxtResolver,
    ) -> Result<bool> {
        let mut result = self.load_from_file(path)?;
        if use_dns {
            result &= self.load_from_dns(network, resolver)?;
        }
        Ok(result)
    }

    /// Compare DNS-published checkpoints against this store without merging.
    ///
    /// Succeeds when DNS is unavailable. Malformed records are skipped.
    pub fn dns_checkpoints_agree(&self, network: NetworkType, resolver: &dyn TxtResolver) -> Result<()> {
        let mut published = Checkpoints::new();
        published.load_from_dns(network, resolver)?;
        self.check_for_conflicts(&published)
    }
}
