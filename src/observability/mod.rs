//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Spans:
//!     airdrop (run_id)
//!         → transfer (index, recipient)
//! ```
//!
//! # Design Decisions
//! - Structured fields for machine parsing
//! - Run ID flows through every event of a run

pub mod logging;
