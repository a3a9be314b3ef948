//! Single-recipient token transfer.
//!
//! # Flow
//! ```text
//! source ATA (get or create)
//!     → destination ATA (get or create)
//!     → mint decimals (fresh query)
//!     → transfer instruction (amount × 10^decimals)
//!     → sign with funding wallet, submit, confirm
//! ```

use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Signature, Signer};
use solana_sdk::transaction::Transaction;
use thiserror::Error;

use crate::ledger::{get_or_create_associated_account, mint_decimals, Ledger, LedgerError, Wallet};

/// Errors for one recipient's transfer.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Recipient string is not a valid address.
    #[error("Invalid recipient address '{0}'")]
    InvalidAddress(String),

    /// Scaled amount does not fit in a u64.
    #[error("Amount {amount} with {decimals} decimals overflows u64")]
    AmountOverflow { amount: u64, decimals: u8 },

    /// Ledger query or submission failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Everything a transfer needs, shared by reference across a run.
#[derive(Debug)]
pub struct AirdropContext<L> {
    ledger: L,
    wallet: Wallet,
    mint: Pubkey,
    amount: u64,
    network: String,
}

impl<L: Ledger> AirdropContext<L> {
    /// Create a new context.
    ///
    /// # Arguments
    /// * `ledger` - Connection used for every query and submission
    /// * `wallet` - Funding wallet (source owner, fee payer, transfer authority)
    /// * `mint` - Token being distributed
    /// * `amount` - Whole tokens per recipient
    /// * `network` - Cluster label for explorer links
    pub fn new(ledger: L, wallet: Wallet, mint: Pubkey, amount: u64, network: impl Into<String>) -> Self {
        Self {
            ledger,
            wallet,
            mint,
            amount,
            network: network.into(),
        }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn mint(&self) -> Pubkey {
        self.mint
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn network(&self) -> &str {
        &self.network
    }
}

/// Result of a confirmed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Transaction signature.
    pub signature: Signature,
    /// Amount in base units actually moved.
    pub raw_amount: u64,
    /// Recipient's associated token account.
    pub destination_account: Pubkey,
}

/// Scale whole tokens to base units.
pub fn raw_amount(amount: u64, decimals: u8) -> Result<u64, TransferError> {
    10u64
        .checked_pow(u32::from(decimals))
        .and_then(|scale| amount.checked_mul(scale))
        .ok_or(TransferError::AmountOverflow { amount, decimals })
}

/// Send the configured amount to `recipient`.
///
/// Nothing is cached between calls: token accounts and decimals are resolved
/// fresh for every recipient.
pub async fn send_token<L: Ledger>(
    ctx: &AirdropContext<L>,
    recipient: &str,
) -> Result<TransferReceipt, TransferError> {
    let owner = ctx.wallet.pubkey();

    let source =
        get_or_create_associated_account(&ctx.ledger, &owner, &ctx.mint, &ctx.wallet).await?;

    let destination_owner = Pubkey::from_str(recipient.trim())
        .map_err(|_| TransferError::InvalidAddress(recipient.to_string()))?;
    let destination =
        get_or_create_associated_account(&ctx.ledger, &destination_owner, &ctx.mint, &ctx.wallet)
            .await?;

    let decimals = mint_decimals(&ctx.ledger, &ctx.mint).await?;
    let raw = raw_amount(ctx.amount, decimals)?;

    let instruction = spl_token::instruction::transfer(
        &spl_token::id(),
        &source,
        &destination,
        &owner,
        &[],
        raw,
    )
    .map_err(|e| LedgerError::Instruction(e.to_string()))?;

    let blockhash = ctx.ledger.latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&owner),
        &[ctx.wallet.keypair()],
        blockhash,
    );
    let signature = ctx.ledger.send_and_confirm(&transaction).await?;

    tracing::info!(
        recipient = %destination_owner,
        token_account = %destination,
        raw_amount = raw,
        decimals = decimals,
        signature = %signature,
        "Transfer confirmed"
    );

    Ok(TransferReceipt {
        signature,
        raw_amount: raw,
        destination_account: destination,
    })
}
