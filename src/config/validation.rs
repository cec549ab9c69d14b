//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (known log level, status bounds, exit code)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: OnErrorConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::OnErrorConfig;

const LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),

    #[error("{field} must be a status code between 100 and 599, got {value}")]
    StatusOutOfRange { field: &'static str, value: u16 },

    #[error("error_status_min ({min}) is greater than error_status_max ({max})")]
    EmptyStatusRange { min: u16, max: u16 },

    #[error("fatal exit code must be non-zero")]
    ZeroExitCode,
}

pub fn validate_config(config: &OnErrorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.logging.level.to_ascii_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLevel(config.logging.level.clone()));
    }

    let http = &config.http;
    for (field, value) in [
        ("error_status_min", http.error_status_min),
        ("error_status_max", http.error_status_max),
    ] {
        if !(100..=599).contains(&value) {
            errors.push(ValidationError::StatusOutOfRange { field, value });
        }
    }
    if http.error_status_min > http.error_status_max {
        errors.push(ValidationError::EmptyStatusRange {
            min: http.error_status_min,
            max: http.error_status_max,
        });
    }

    if config.fatal.exit_code == 0 {
        errors.push(ValidationError::ZeroExitCode);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
