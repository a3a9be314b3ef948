//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, concurrency > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Settings → Result<(), Vec<ValidationError>>
//! - Runs before any network activity

use crate::config::schema::Settings;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Offending field.
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate settings, collecting every violation.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.network.trim().is_empty() {
        errors.push(ValidationError {
            field: "network",
            message: "must not be empty".to_string(),
        });
    }

    if settings.max_in_flight == 0 {
        errors.push(ValidationError {
            field: "max_in_flight",
            message: "must be at least 1".to_string(),
        });
    }

    if settings.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "rpc_timeout_secs",
            message: "must be at least 1".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&settings.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError {
            field: "log_level",
            message: format!("unknown level '{}'", settings.log_level),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
