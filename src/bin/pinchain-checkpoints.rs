#![forbid(unsafe_code)]
//! Inspect and query the checkpoint table a node would build at startup

use clap::{Parser, Subcommand};
use colored::*;
use pinchain::checkpoints::Checkpoints;
use pinchain::config::{load_config, DEFAULT_CONFIG_PATH};
use pinchain::dns::checkpoint_resolver;
use pinchain::hash::{hash_from_hex, hash_to_hex};
use pinchain::network::NetworkType;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pinchain-checkpoints", about = "Query the PinChain checkpoint table")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the configured network (mainnet, testnet, stagenet)
    #[arg(long)]
    network: Option<NetworkType>,

    /// Override the configured checkpoint hash file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Skip DNS checkpoints
    #[arg(long)]
    no_dns: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every checkpoint
    Show,
    /// Check a block hash against the checkpoint at its height
    Check { height: u64, hash: String },
    /// Report whether a height falls inside the checkpoint zone
    Zone { height: u64 },
    /// Report whether an alternative block may replace history
    Alt { chain_height: u64, block_height: u64 },
}

fn build(cli: &Cli) -> Result<Checkpoints, Box<dyn std::error::Error>> {
    let config = load_config(&cli.config)?;
    let network = cli.network.unwrap_or(config.network.network_type);
    let file = cli.file.clone().unwrap_or_else(|| config.checkpoints.file_path());
    let use_dns = config.checkpoints.use_dns && !cli.no_dns;
    let resolver = checkpoint_resolver(use_dns, config.checkpoints.dns_timeout());

    let mut checkpoints = Checkpoints::with_defaults(network)?;
    if config.checkpoints.enforce_dns {
        checkpoints.load_new_checkpoints(&file, network, use_dns, resolver.as_ref())?;
    } else {
        checkpoints.load_new_checkpoints(&file, network, false, resolver.as_ref())?;
        if use_dns {
            if let Err(e) = checkpoints.dns_checkpoints_agree(network, resolver.as_ref()) {
                warn!("DNS checkpoints disagree with local checkpoints: {}", e);
            }
        }
    }
    Ok(checkpoints)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let checkpoints = build(&cli)?;

    match cli.command {
        Command::Show => {
            println!("{}", "PinChain Checkpoints".bright_cyan().bold());
            println!("{}", "--------------------".bright_cyan());
            for checkpoint in checkpoints.iter() {
                println!(
                    "{:>12}  {}",
                    checkpoint.height.to_string().bright_white(),
                    hash_to_hex(&checkpoint.hash)
                );
            }
            match checkpoints.get_max_height() {
                Ok(max) => println!("\n{} points, max height {}", checkpoints.len(), max.to_string().bright_green()),
                Err(_) => println!("{}", "No checkpoints".yellow()),
            }
        }
        Command::Check { height, hash } => {
            let hash = hash_from_hex(&hash)?;
            let check = checkpoints.check_block(height, &hash);
            if !check.is_checkpoint {
                println!("{}", format!("No checkpoint at height {}", height).yellow());
            } else if check.passed {
                println!("{}", format!("Checkpoint passed at height {}", height).bright_green());
            } else {
                println!("{}", format!("Checkpoint FAILED at height {}", height).red().bold());
            }
        }
        Command::Zone { height } => {
            let in_zone = checkpoints.is_in_checkpoint_zone(height);
            println!("height {} in checkpoint zone: {}", height, in_zone);
        }
        Command::Alt { chain_height, block_height } => {
            let allowed = checkpoints.is_alternative_block_allowed(chain_height, block_height);
            println!(
                "alternative block at {} with chain height {}: {}",
                block_height,
                chain_height,
                if allowed { "allowed".bright_green() } else { "rejected".red() }
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", format!("Error: {}", e).red());
            ExitCode::FAILURE
        }
    }
}
