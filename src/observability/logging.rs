//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber
//! - Select pretty, compact or JSON output
//! - Configure log level from config, overridable through `RUST_LOG`

use tracing_subscriber::filter::FromEnvError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::InitError;

/// Build the filter: `RUST_LOG` if set and valid, the configured directives otherwise.
///
/// A `RUST_LOG` that is set but does not parse is handed back alongside the
/// fallback filter so it can be reported once logging is up.
pub fn env_filter(config: &LoggingConfig) -> Result<(EnvFilter, Option<FromEnvError>), InitError> {
    let env_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok((filter, None)),
        Err(err) => {
            let filter = EnvFilter::try_new(config.directives())?;
            Ok((filter, env_set.then_some(err)))
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), InitError> {
    let (filter, rejected) = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init()?,
        LogFormat::Pretty => registry.with(fmt::layer()).try_init()?,
    }

    if let Some(err) = rejected {
        tracing::warn!(
            variable = EnvFilter::DEFAULT_ENV,
            error = %err,
            fallback = %config.directives(),
            "Ignoring invalid log filter from environment"
        );
    }
    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}
