//! Per-recipient outcomes and console reporting.

use solana_sdk::signature::Signature;

use crate::airdrop::transfer::{TransferError, TransferReceipt};

/// Outcome of one recipient's transfer.
#[derive(Debug)]
pub struct TransferOutcome {
    /// Position in the recipient list.
    pub index: usize,
    /// Recipient address as given in the list.
    pub recipient: String,
    pub result: Result<TransferReceipt, TransferError>,
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// All outcomes of a run, in recipient order.
#[derive(Debug)]
pub struct AirdropReport {
    network: String,
    outcomes: Vec<TransferOutcome>,
}

impl AirdropReport {
    pub fn new(network: impl Into<String>, outcomes: Vec<TransferOutcome>) -> Self {
        Self {
            network: network.into(),
            outcomes,
        }
    }

    pub fn outcomes(&self) -> &[TransferOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// One line per recipient, then a summary line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(receipt) => format!(
                    "Transaction Success! {} -> {}",
                    outcome.recipient,
                    explorer_url(&receipt.signature, &self.network)
                ),
                Err(e) => format!("Transaction Failed! {}: {}", outcome.recipient, e),
            })
            .collect();

        lines.push(format!(
            "{} of {} transfers succeeded, {} failed",
            self.succeeded(),
            self.outcomes.len(),
            self.failed()
        ));
        lines
    }

    /// Print successes to stdout and failures to stderr.
    pub fn print(&self) {
        let mut lines = self.lines();
        let summary = lines.pop().unwrap_or_default();

        for (outcome, line) in self.outcomes.iter().zip(lines) {
            if outcome.is_success() {
                println!("{}", line);
            } else {
                eprintln!("{}", line);
            }
        }
        println!("{}", summary);
    }
}

/// Explorer link for a transaction on `network`.
///
/// Mainnet links carry no cluster parameter.
pub fn explorer_url(signature: &Signature, network: &str) -> String {
    match network {
        "mainnet" | "mainnet-beta" => format!("https://explorer.solana.com/tx/{}", signature),
        cluster => format!("https://explorer.solana.com/tx/{}?cluster={}", signature, cluster),
    }
}
