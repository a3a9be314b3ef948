//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env / process environment
//!     → loader.rs (AirdropEnv::from_env, required values)
//!
//! settings file (TOML, optional) + CLI overrides
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Required values have no defaults; a missing one aborts before any RPC call
//! - All settings fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_env_file, load_settings, ConfigError};
pub use schema::{AirdropEnv, CommitmentLevel, Settings};
pub use validation::{validate_settings, ValidationError};
