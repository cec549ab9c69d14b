//! `tracing`-backed sink.

use std::io::{self, Write};

use crate::config::FatalConfig;
use crate::fields::Fields;
use crate::sink::{Level, Sink};

/// Target used for every event emitted by [`TracingSink`].
pub const TARGET: &str = "onerror";

/// Sink that forwards records to the installed `tracing` subscriber.
///
/// Attached fields are rendered as one JSON object in the `fields` value,
/// since their names are only known at runtime.
#[derive(Debug, Clone)]
pub struct TracingSink {
    exit_code: i32,
}

impl TracingSink {
    pub fn new(exit_code: i32) -> Self {
        Self { exit_code }
    }

    pub fn from_config(config: &FatalConfig) -> Self {
        Self::new(config.exit_code)
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::from_config(&FatalConfig::default())
    }
}

impl Sink for TracingSink {
    fn emit(&self, level: Level, fields: &Fields, message: &str) {
        match level {
            Level::Error => tracing::error!(target: TARGET, fields = %fields, "{}", message),
            Level::Warning => tracing::warn!(target: TARGET, fields = %fields, "{}", message),
            Level::Fatal => {
                tracing::error!(target: TARGET, fatal = true, fields = %fields, "{}", message)
            }
        }
    }

    fn terminate(&self) -> ! {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(self.exit_code)
    }
}
