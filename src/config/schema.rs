//! Configuration schema definitions.
//!
//! Two layers make up the runtime configuration:
//! - [`AirdropEnv`]: the required values, read from the process environment
//! - [`Settings`]: optional tuning, read from a TOML file and CLI flags
//!
//! All settings fields have defaults so an empty (or absent) file is valid.

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::ledger::Wallet;

/// Required values for a run, loaded once from the environment.
#[derive(Debug)]
pub struct AirdropEnv {
    /// Funding wallet that pays for and signs every transaction.
    pub wallet: Wallet,

    /// Recipient list file name (resolved next to the executable).
    pub receivers_filename: String,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Mint of the token being distributed.
    pub mint: Pubkey,

    /// Whole tokens sent to each recipient, before decimal scaling.
    pub transfer_amount: u64,
}

/// Optional tuning for a run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Cluster label used in explorer links (e.g. "devnet", "mainnet-beta").
    pub network: String,

    /// Confirmation strength for queries and submission.
    pub commitment: CommitmentLevel,

    /// Spacing between transfer initiations in milliseconds.
    pub dispatch_interval_ms: u64,

    /// Maximum transfers in flight at once.
    pub max_in_flight: usize,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            network: "devnet".to_string(),
            commitment: CommitmentLevel::Confirmed,
            dispatch_interval_ms: 400,
            max_in_flight: 16,
            rpc_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

/// Supported confirmation strengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentLevel {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl CommitmentLevel {
    /// Map to the RPC client's commitment type.
    pub fn to_commitment_config(self) -> CommitmentConfig {
        match self {
            CommitmentLevel::Processed => CommitmentConfig::processed(),
            CommitmentLevel::Confirmed => CommitmentConfig::confirmed(),
            CommitmentLevel::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl std::fmt::Display for CommitmentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CommitmentLevel::Processed => "processed",
            CommitmentLevel::Confirmed => "confirmed",
            CommitmentLevel::Finalized => "finalized",
        };
        f.write_str(s)
    }
}
