//! Configuration loading from the environment and from disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;

use crate::config::schema::{AirdropEnv, Settings};
use crate::config::validation::{validate_settings, ValidationError};
use crate::ledger::Wallet;

/// Comma-separated secret key bytes of the funding wallet.
pub const SECRET_ENV_VAR: &str = "SECRET";
/// Recipient list file name.
pub const RECEIVERS_ENV_VAR: &str = "RECEIVERS_JSON_FILENAME";
/// RPC endpoint URL.
pub const RPC_URL_ENV_VAR: &str = "SOLANA_CONNECTION_URL";
/// Mint address of the distributed token.
pub const TOKEN_ENV_VAR: &str = "TOKEN_ADDRESS";
/// Whole tokens per recipient.
pub const AMOUNT_ENV_VAR: &str = "TRANSFER_AMOUNT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, reason: String },
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Recipients(serde_json::Error),
    EnvFile(dotenvy::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} not found in environment", key),
            ConfigError::Invalid { key, reason } => write!(f, "Invalid {}: {}", key, reason),
            ConfigError::Io { path, source } => {
                write!(f, "IO error reading {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Recipients(e) => write!(f, "Invalid recipient list: {}", e),
            ConfigError::EnvFile(e) => write!(f, "Invalid env file: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AirdropEnv {
    /// Load the required values from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the required values through `lookup`.
    ///
    /// Every key is read and checked here, so a bad environment fails before
    /// any connection is opened. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let secret = require(SECRET_ENV_VAR)?;
        let receivers_filename = require(RECEIVERS_ENV_VAR)?;
        let rpc_url = require(RPC_URL_ENV_VAR)?;
        let token_address = require(TOKEN_ENV_VAR)?;
        let amount = require(AMOUNT_ENV_VAR)?;

        let wallet = Wallet::from_secret(&secret).map_err(|e| ConfigError::Invalid {
            key: SECRET_ENV_VAR,
            reason: e.to_string(),
        })?;

        url::Url::parse(&rpc_url).map_err(|e| ConfigError::Invalid {
            key: RPC_URL_ENV_VAR,
            reason: format!("'{}': {}", rpc_url, e),
        })?;

        let mint = Pubkey::from_str(&token_address).map_err(|e| ConfigError::Invalid {
            key: TOKEN_ENV_VAR,
            reason: format!("'{}': {}", token_address, e),
        })?;

        let transfer_amount = amount.parse::<u64>().map_err(|e| ConfigError::Invalid {
            key: AMOUNT_ENV_VAR,
            reason: format!("'{}': {}", amount, e),
        })?;

        Ok(Self {
            wallet,
            receivers_filename,
            rpc_url,
            mint,
            transfer_amount,
        })
    }
}

/// Load variables from an env file into the process environment.
///
/// With no `path`, `./.env` is optional: only its absence is tolerated, a
/// malformed file is still an error. An explicit `path` must exist.
/// Variables already set in the process take precedence.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    let result = match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if path.is_none() && e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::EnvFile(e)),
    }
}

/// Load and validate settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_settings(&settings).map_err(ConfigError::Validation)?;

    Ok(settings)
}
