//! SPL token airdrop library.

pub mod airdrop;
pub mod config;
pub mod ledger;
pub mod observability;
pub mod recipients;

pub use airdrop::{run_airdrop, AirdropContext, AirdropReport, DispatchConfig};
pub use config::{AirdropEnv, Settings};
pub use ledger::{Ledger, SolanaLedger, Wallet};
