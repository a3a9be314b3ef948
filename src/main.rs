//! SPL token airdrop.
//!
//! Sends a fixed amount of one token from a funding wallet to every address
//! in a JSON recipient list, one transaction per recipient.
//!
//! # Architecture Overview
//!
//! ```text
//!   .env / environment ──▶ config ──▶ AirdropEnv (wallet, mint, amount, RPC URL)
//!   settings.toml + flags ─────────▶ Settings (network, commitment, pacing)
//!   receivers.json ──────▶ recipients
//!
//!                ┌──────────────────────────────────────────┐
//!                │ airdrop::dispatch (400ms stagger, cap)   │
//!                │    └─▶ airdrop::transfer (per recipient) │
//!                │           └─▶ ledger (RPC, ATAs, mint)   │
//!                └──────────────────────────────────────────┘
//!                                  │
//!                                  ▼
//!                    report: one line per recipient
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::Instrument;

use token_airdrop::config::{
    load_env_file, load_settings, validate_settings, CommitmentLevel, ConfigError,
};
use token_airdrop::observability::logging;
use token_airdrop::recipients::{load_recipients, resolve_recipients_path};
use token_airdrop::{run_airdrop, AirdropContext, AirdropEnv, DispatchConfig, Settings, SolanaLedger};

#[derive(Parser)]
#[command(name = "token-airdrop")]
#[command(about = "Send a fixed amount of an SPL token to a list of addresses", long_about = None)]
struct Cli {
    /// Environment file to load (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Cluster label for explorer links
    #[arg(long)]
    network: Option<String>,

    /// Confirmation strength
    #[arg(long, value_enum)]
    commitment: Option<CommitmentLevel>,

    /// Milliseconds between transfer initiations
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Maximum transfers in flight
    #[arg(long)]
    max_in_flight: Option<usize>,
}

impl Cli {
    fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };

        if let Some(network) = &self.network {
            settings.network = network.clone();
        }
        if let Some(commitment) = self.commitment {
            settings.commitment = commitment;
        }
        if let Some(interval_ms) = self.interval_ms {
            settings.dispatch_interval_ms = interval_ms;
        }
        if let Some(max_in_flight) = self.max_in_flight {
            settings.max_in_flight = max_in_flight;
        }

        validate_settings(&settings).map_err(ConfigError::Validation)?;
        Ok(settings)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    load_env_file(cli.env_file.as_deref())?;

    let settings = cli.settings()?;
    logging::init(&settings.log_level);

    let run_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("airdrop", run_id = %run_id);

    async move {
        tracing::info!("token-airdrop v{} starting", env!("CARGO_PKG_VERSION"));

        let env = AirdropEnv::from_env()?;
        let recipients_path = resolve_recipients_path(&env.receivers_filename);
        let recipients = load_recipients(&recipients_path)?;

        tracing::info!(
            network = %settings.network,
            commitment = %settings.commitment,
            funding_wallet = %env.wallet.pubkey(),
            "Configuration loaded"
        );

        let ledger = SolanaLedger::new(&env.rpc_url, &settings);
        let ctx = AirdropContext::new(
            ledger,
            env.wallet,
            env.mint,
            env.transfer_amount,
            settings.network.clone(),
        );

        let report = run_airdrop(&ctx, &recipients, &DispatchConfig::from_settings(&settings)).await;
        report.print();

        Ok::<(), Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await
}
