//! Log emission subsystem.
//!
//! # Data Flow
//! ```text
//! Entry (fields + message)
//!     → Sink::emit (error / warning)
//!     → Sink::fatal (fatal record, then Sink::terminate)
//! ```
//!
//! # Design Decisions
//! - The sink is the only place records leave the crate
//! - Termination is part of the sink so tests can observe it without exiting
//! - Sinks must be safe to share between threads

pub mod events;

use std::fmt;

use crate::fields::Fields;

pub use events::TracingSink;

/// Severity of an emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Warning,
    Fatal,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => f.write_str("error"),
            Level::Warning => f.write_str("warning"),
            Level::Fatal => f.write_str("fatal"),
        }
    }
}

/// Destination for enriched log records.
pub trait Sink: Send + Sync {
    /// Emit one record with the given fields.
    fn emit(&self, level: Level, fields: &Fields, message: &str);

    /// Stop the process. Called only after the fatal record was emitted.
    fn terminate(&self) -> !;

    /// Emit a fatal record, then terminate.
    fn fatal(&self, fields: &Fields, message: &str) -> ! {
        self.emit(Level::Fatal, fields, message);
        self.terminate()
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn emit(&self, level: Level, fields: &Fields, message: &str) {
        (**self).emit(level, fields, message)
    }

    fn terminate(&self) -> ! {
        (**self).terminate()
    }

    fn fatal(&self, fields: &Fields, message: &str) -> ! {
        (**self).fatal(fields, message)
    }
}
