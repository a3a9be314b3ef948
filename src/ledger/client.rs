//! Solana RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint at a fixed commitment
//! - Query account state and recent blockhashes
//! - Submit transactions and wait for confirmation

use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::config::Settings;
use crate::ledger::types::{Ledger, LedgerError, LedgerResult};

/// Ledger backed by a single RPC connection.
pub struct SolanaLedger {
    rpc: RpcClient,
    rpc_url: String,
    commitment: CommitmentConfig,
    timeout: Duration,
}

impl SolanaLedger {
    /// Create a new ledger client.
    ///
    /// No request is made here; the first RPC call happens on first use.
    pub fn new(rpc_url: &str, settings: &Settings) -> Self {
        let commitment = settings.commitment.to_commitment_config();
        let timeout = Duration::from_secs(settings.rpc_timeout_secs);
        let rpc = RpcClient::new_with_timeout_and_commitment(rpc_url.to_string(), timeout, commitment);

        tracing::info!(
            rpc_url = %rpc_url,
            commitment = %settings.commitment,
            timeout_secs = settings.rpc_timeout_secs,
            "Ledger client initialized"
        );

        Self {
            rpc,
            rpc_url: rpc_url.to_string(),
            commitment,
            timeout,
        }
    }

    /// Get the commitment used for queries and confirmation.
    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }
}

impl Ledger for SolanaLedger {
    async fn fetch_account(&self, address: &Pubkey) -> LedgerResult<Option<Account>> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.commitment)
            .await
            .map_err(|e| LedgerError::Rpc(format!("getAccountInfo {}: {}", address, e)))?;
        Ok(response.value)
    }

    async fn latest_blockhash(&self) -> LedgerResult<Hash> {
        let (blockhash, _last_valid_height) = self
            .rpc
            .get_latest_blockhash_with_commitment(self.commitment)
            .await
            .map_err(|e| LedgerError::Rpc(format!("getLatestBlockhash: {}", e)))?;
        Ok(blockhash)
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> LedgerResult<Signature> {
        self.rpc
            .send_and_confirm_transaction(transaction)
            .await
            .map_err(|e| LedgerError::Rpc(format!("sendTransaction: {}", e)))
    }
}

impl std::fmt::Debug for SolanaLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaLedger")
            .field("rpc_url", &self.rpc_url)
            .field("commitment", &self.commitment.commitment)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitmentLevel;
    use solana_sdk::commitment_config::CommitmentLevel as RpcCommitment;

    #[tokio::test]
    async fn test_client_creation() {
        let settings = Settings {
            commitment: CommitmentLevel::Finalized,
            ..Settings::default()
        };
        let ledger = SolanaLedger::new("http://localhost:8899", &settings);
        assert_eq!(ledger.commitment().commitment, RpcCommitment::Finalized);
        assert!(format!("{:?}", ledger).contains("localhost:8899"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_rpc_error() {
        let settings = Settings {
            rpc_timeout_secs: 1,
            ..Settings::default()
        };
        // Port 9 (discard) is not an RPC server.
        let ledger = SolanaLedger::new("http://127.0.0.1:9", &settings);
        let result = ledger.latest_blockhash().await;
        assert!(matches!(result, Err(LedgerError::Rpc(_))));
    }
}
