//! Token account helpers built on [`Ledger`].
//!
//! # Responsibilities
//! - Derive and lazily create associated token accounts
//! - Read a mint's decimal precision

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signer;
use solana_sdk::transaction::Transaction;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use spl_token::solana_program::program_pack::Pack;
use spl_token::state::Mint;

use crate::ledger::types::{Ledger, LedgerError, LedgerResult};
use crate::ledger::wallet::Wallet;

/// Resolve the associated token account of `owner` for `mint`, creating it if absent.
///
/// Creation uses the idempotent instruction, so two transfers racing to create
/// the same account both succeed.
///
/// # Arguments
/// * `owner` - Wallet that will own the token account
/// * `mint` - Token mint
/// * `payer` - Signs and pays rent for the creation
pub async fn get_or_create_associated_account<L: Ledger>(
    ledger: &L,
    owner: &Pubkey,
    mint: &Pubkey,
    payer: &Wallet,
) -> LedgerResult<Pubkey> {
    let address = get_associated_token_address(owner, mint);

    if ledger.fetch_account(&address).await?.is_some() {
        return Ok(address);
    }

    tracing::debug!(owner = %owner, token_account = %address, "Creating associated token account");

    let instruction =
        create_associated_token_account_idempotent(&payer.pubkey(), owner, mint, &spl_token::id());
    let blockhash = ledger.latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&payer.pubkey()),
        &[payer.keypair()],
        blockhash,
    );
    match ledger.send_and_confirm(&transaction).await {
        Ok(signature) => {
            tracing::info!(
                owner = %owner,
                token_account = %address,
                signature = %signature,
                "Associated token account created"
            );
            Ok(address)
        }
        // A concurrent identical create may have landed first.
        Err(e) => {
            if ledger.fetch_account(&address).await?.is_some() {
                tracing::debug!(
                    token_account = %address,
                    error = %e,
                    "Create rejected but account exists"
                );
                Ok(address)
            } else {
                Err(e)
            }
        }
    }
}

/// Query the decimal precision of `mint`.
pub async fn mint_decimals<L: Ledger>(ledger: &L, mint: &Pubkey) -> LedgerResult<u8> {
    let account = ledger
        .fetch_account(mint)
        .await?
        .ok_or(LedgerError::AccountNotFound(*mint))?;

    if account.owner != spl_token::id() {
        return Err(LedgerError::NotAMint(*mint));
    }

    let state = Mint::unpack(&account.data).map_err(|_| LedgerError::NotAMint(*mint))?;
    Ok(state.decimals)
}
