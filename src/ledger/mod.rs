//! Ledger integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (secret key, RPC URL)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (RPC connection with timeout and commitment)
//!     → accounts.rs (associated token accounts, mint decimals)
//! ```
//!
//! # Security Constraints
//! - Secret keys ONLY from environment variables
//! - Never log secret keys or sensitive data
//! - All RPC calls have a configurable timeout

pub mod accounts;
pub mod client;
pub mod types;
pub mod wallet;

pub use accounts::{get_or_create_associated_account, mint_decimals};
pub use client::SolanaLedger;
pub use types::{Ledger, LedgerError, LedgerResult};
pub use wallet::Wallet;
