//! Configuration management for PinChain

use crate::error::{CheckpointError, Result};
use crate::network::NetworkType;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub checkpoints: CheckpointsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub network_type: NetworkType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckpointsConfig {
    #[serde(default = "default_checkpoint_file")]
    pub file: String,
    #[serde(default = "default_use_dns")]
    pub use_dns: bool,
    /// Merge DNS checkpoints instead of only warning about disagreement.
    #[serde(default)]
    pub enforce_dns: bool,
    #[serde(default = "default_dns_timeout")]
    pub dns_timeout_secs: u64,
}

impl Default for CheckpointsConfig {
    fn default() -> Self {
        Self {
            file: default_checkpoint_file(),
            use_dns: default_use_dns(),
            enforce_dns: false,
            dns_timeout_secs: default_dns_timeout(),
        }
    }
}

impl CheckpointsConfig {
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.file)
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }
}

fn default_checkpoint_file() -> String {
    "checkpoints.json".to_string()
}

fn default_use_dns() -> bool {
    true
}

fn default_dns_timeout() -> u64 {
    20
}

impl Config {
    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.checkpoints.file.trim().is_empty() {
            return Err(CheckpointError::Config(
                "checkpoints.file must not be empty".to_string(),
            ));
        }
        if self.checkpoints.dns_timeout_secs == 0 {
            return Err(CheckpointError::Config(
                "checkpoints.dns_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from `path`, falling back to defaults when it is absent.
pub fn load_config(path: &Path) -> Result<Config> {
    match fs::read_to_string(path) {
        Ok(config_str) => Config::from_toml(&config_str),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}
