//! In-memory ledger for integration tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use spl_token::instruction::TokenInstruction;
use spl_token::solana_program::program_pack::Pack;
use spl_token::state::Mint;
use tokio::time::Instant;

use token_airdrop::ledger::{Ledger, LedgerError, LedgerResult};

/// A decoded SPL token transfer seen by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentTransfer {
    pub source: Pubkey,
    pub destination: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub at: Instant,
}

/// What a submitted transaction did, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    CreateAccount(Pubkey),
    Transfer(SentTransfer),
}

/// Ledger with scripted rejections and an optional confirmation delay.
#[derive(Default)]
pub struct FakeLedger {
    accounts: Mutex<HashMap<Pubkey, Account>>,
    rejected: HashSet<Pubkey>,
    submitted: Mutex<Vec<Submitted>>,
    fetches: Mutex<Vec<Pubkey>>,
    blockhash: Option<Hash>,
    reject_duplicates: bool,
    seen: Mutex<HashSet<Signature>>,
    confirm_delay: Duration,
}

#[allow(dead_code)]
impl FakeLedger {
    /// Ledger holding one initialized mint.
    pub fn with_mint(mint: Pubkey, decimals: u8) -> Self {
        let ledger = Self::default();
        ledger.insert(mint, mint_account(decimals));
        ledger
    }

    /// Reject every transaction that references `address`.
    pub fn reject(mut self, address: Pubkey) -> Self {
        self.rejected.insert(address);
        self
    }

    /// Hand out the same blockhash on every call.
    pub fn fixed_blockhash(mut self, blockhash: Hash) -> Self {
        self.blockhash = Some(blockhash);
        self
    }

    /// Reject a signature that was already submitted, like a real cluster.
    pub fn reject_duplicates(mut self) -> Self {
        self.reject_duplicates = true;
        self
    }

    /// Effects land at submission; confirmation returns after `delay`.
    pub fn confirm_delay(mut self, delay: Duration) -> Self {
        self.confirm_delay = delay;
        self
    }

    pub fn insert(&self, address: Pubkey, account: Account) {
        self.accounts.lock().unwrap().insert(address, account);
    }

    pub fn has_account(&self, address: &Pubkey) -> bool {
        self.accounts.lock().unwrap().contains_key(address)
    }

    pub fn submitted(&self) -> Vec<Submitted> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn transfers(&self) -> Vec<SentTransfer> {
        self.submitted()
            .into_iter()
            .filter_map(|s| match s {
                Submitted::Transfer(t) => Some(t),
                Submitted::CreateAccount(_) => None,
            })
            .collect()
    }

    pub fn fetch_count(&self, address: &Pubkey) -> usize {
        self.fetches.lock().unwrap().iter().filter(|a| *a == address).count()
    }
}

impl Ledger for FakeLedger {
    async fn fetch_account(&self, address: &Pubkey) -> LedgerResult<Option<Account>> {
        self.fetches.lock().unwrap().push(*address);
        Ok(self.accounts.lock().unwrap().get(address).cloned())
    }

    async fn latest_blockhash(&self) -> LedgerResult<Hash> {
        Ok(self.blockhash.unwrap_or_else(Hash::new_unique))
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> LedgerResult<Signature> {
        let message = &transaction.message;
        let keys = &message.account_keys;

        if keys.iter().any(|k| self.rejected.contains(k)) {
            return Err(LedgerError::Rpc(
                "Transaction simulation failed: Error processing Instruction 0".to_string(),
            ));
        }

        if self.reject_duplicates && !self.seen.lock().unwrap().insert(transaction.signatures[0]) {
            return Err(LedgerError::Rpc(
                "This transaction has already been processed".to_string(),
            ));
        }

        for ix in &message.instructions {
            let program = keys[ix.program_id_index as usize];
            let account = |i: usize| keys[ix.accounts[i] as usize];

            if program == spl_associated_token_account::id() {
                let address = account(1);
                self.insert(address, token_account());
                self.submitted.lock().unwrap().push(Submitted::CreateAccount(address));
            } else if program == spl_token::id() {
                if let Ok(TokenInstruction::Transfer { amount }) = TokenInstruction::unpack(&ix.data) {
                    self.submitted.lock().unwrap().push(Submitted::Transfer(SentTransfer {
                        source: account(0),
                        destination: account(1),
                        authority: account(2),
                        amount,
                        at: Instant::now(),
                    }));
                }
            }
        }

        if !self.confirm_delay.is_zero() {
            tokio::time::sleep(self.confirm_delay).await;
        }
        Ok(transaction.signatures[0])
    }
}

pub fn mint_account(decimals: u8) -> Account {
    let mut data = vec![0u8; Mint::LEN];
    let state = Mint {
        decimals,
        is_initialized: true,
        ..Mint::default()
    };
    Mint::pack(state, &mut data).unwrap();
    Account {
        lamports: 1_461_600,
        data,
        owner: spl_token::id(),
        executable: false,
        rent_epoch: 0,
    }
}

fn token_account() -> Account {
    Account {
        lamports: 2_039_280,
        data: vec![0u8; spl_token::state::Account::LEN],
        owner: spl_token::id(),
        executable: false,
        rent_epoch: 0,
    }
}
