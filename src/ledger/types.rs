//! Ledger-facing types and error definitions.

use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// RPC connection, request, or submission failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Expected account does not exist on the ledger.
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),

    /// Account exists but is not an SPL token mint.
    #[error("Account {0} is not a token mint")]
    NotAMint(Pubkey),

    /// Instruction could not be built.
    #[error("Instruction error: {0}")]
    Instruction(String),

    /// Invalid secret key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Minimal view of the ledger needed to run transfers.
///
/// Implemented by [`SolanaLedger`](crate::ledger::SolanaLedger) over RPC and by
/// in-memory fakes in tests. Futures are not required to be `Send`; the
/// dispatcher drives every transfer from one task.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// Fetch an account at the configured commitment, `None` if absent.
    async fn fetch_account(&self, address: &Pubkey) -> LedgerResult<Option<Account>>;

    /// Fetch a recent blockhash to bound a transaction's validity.
    async fn latest_blockhash(&self) -> LedgerResult<Hash>;

    /// Submit a signed transaction and wait for confirmation.
    async fn send_and_confirm(&self, transaction: &Transaction) -> LedgerResult<Signature>;
}
