//! Airdrop subsystem.
//!
//! # Data Flow
//! ```text
//! recipients (Vec<String>)
//!     → dispatch.rs (staggered start, in-flight cap)
//!     → transfer.rs (one transaction per recipient)
//!     → report.rs (per-recipient outcome, explorer links)
//! ```

pub mod dispatch;
pub mod report;
pub mod transfer;

use tracing::Instrument;

use crate::ledger::Ledger;

pub use dispatch::{dispatch, DispatchConfig};
pub use report::{explorer_url, AirdropReport, TransferOutcome};
pub use transfer::{raw_amount, send_token, AirdropContext, TransferError, TransferReceipt};

/// Send the configured amount to every recipient.
///
/// Never fails as a whole: each recipient's result lands in the report.
pub async fn run_airdrop<L: Ledger>(
    ctx: &AirdropContext<L>,
    recipients: &[String],
    config: &DispatchConfig,
) -> AirdropReport {
    tracing::info!(
        recipients = recipients.len(),
        mint = %ctx.mint(),
        amount = ctx.amount(),
        interval = ?config.interval,
        max_in_flight = config.max_in_flight,
        "Starting airdrop"
    );

    let results = dispatch(recipients, config, |index, recipient| {
        let span = tracing::info_span!("transfer", index, recipient = %recipient);
        async move {
            let result = send_token(ctx, recipient).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "Transfer failed");
            }
            result
        }
        .instrument(span)
    })
    .await;

    let outcomes = results
        .into_iter()
        .map(|(index, result)| TransferOutcome {
            index,
            recipient: recipients[index].clone(),
            result,
        })
        .collect();

    let report = AirdropReport::new(ctx.network(), outcomes);
    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "Airdrop finished"
    );
    report
}
