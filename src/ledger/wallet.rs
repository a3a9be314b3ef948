//! Funding wallet and transaction signing.
//!
//! # Security
//! - Secret keys are loaded ONLY from the environment
//! - Keys are never logged or serialized

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use crate::ledger::types::{LedgerError, LedgerResult};

/// Wallet that pays for and signs every airdrop transaction.
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Create a wallet from comma-separated secret key bytes.
    ///
    /// Accepts the `solana-keygen` JSON form too (`[12,34,...]`), so a keypair
    /// file's contents can be pasted as-is.
    ///
    /// # Security
    /// The secret is never logged; errors mention only its shape.
    pub fn from_secret(secret: &str) -> LedgerResult<Self> {
        let trimmed = secret.trim().trim_start_matches('[').trim_end_matches(']');

        let bytes = trimmed
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| LedgerError::Wallet("secret must be comma-separated bytes (0-255)".to_string()))?;

        Self::from_bytes(&bytes)
    }

    /// Create a wallet from raw 64-byte keypair material.
    pub fn from_bytes(bytes: &[u8]) -> LedgerResult<Self> {
        let keypair = Keypair::from_bytes(bytes).map_err(|_| {
            LedgerError::Wallet(format!("expected a 64-byte keypair, got {} bytes", bytes.len()))
        })?;

        tracing::info!(address = %keypair.pubkey(), "Wallet initialized");

        Ok(Self { keypair })
    }

    /// Get the wallet's public key.
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Signer for transaction construction.
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

impl From<Keypair> for Wallet {
    fn from(keypair: Keypair) -> Self {
        Self { keypair }
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("pubkey", &self.keypair.pubkey())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(bytes: &[u8]) -> String {
        bytes.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(",")
    }

    #[test]
    fn test_wallet_from_secret() {
        let keypair = Keypair::new();
        let wallet = Wallet::from_secret(&csv(&keypair.to_bytes())).unwrap();
        assert_eq!(wallet.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_wallet_from_json_array_form() {
        let keypair = Keypair::new();
        let secret = format!("[{}]", csv(&keypair.to_bytes()).replace(',', ", "));
        let wallet = Wallet::from_secret(&secret).unwrap();
        assert_eq!(wallet.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_invalid_secret() {
        let err = Wallet::from_secret("1,2,nope").unwrap_err();
        assert!(err.to_string().contains("comma-separated"));

        let err = Wallet::from_secret("1,2,300").unwrap_err();
        assert!(matches!(err, LedgerError::Wallet(_)));

        let err = Wallet::from_secret("1,2,3").unwrap_err();
        assert!(err.to_string().contains("3 bytes"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let keypair = Keypair::new();
        let secret = csv(&keypair.to_bytes());
        let wallet = Wallet::from(keypair);

        let debug = format!("{:?}", wallet);
        assert!(debug.contains(&wallet.pubkey().to_string()));
        assert!(!debug.contains(&secret));
    }
}
