//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! OnErrorConfig
//!     → logging.rs (tracing subscriber: filter + formatter)
//!     → global entry (TracingSink with configured exit code and classifier)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) available for machine parsing
//! - Both pieces are installed once per process
//! - The global entry is checked first, so a second `init` leaves the
//!   subscriber alone

pub mod logging;

use crate::config::OnErrorConfig;
use crate::entry::{global, Entry};
use crate::error::InitError;

/// Install the subscriber and the global entry from `config`.
///
/// Returns [`InitError::AlreadyInitialized`] without touching the subscriber
/// when the global entry already exists, including the default one installed
/// by an earlier call to [`global::global`].
pub fn init(config: &OnErrorConfig) -> Result<(), InitError> {
    if global::is_initialized() {
        return Err(InitError::AlreadyInitialized);
    }
    logging::init_logging(&config.logging)?;
    global::init(Entry::from_config(config))
}
