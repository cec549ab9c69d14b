//! Scoped logging entries.
//!
//! # Responsibilities
//! - Bundle a sink with a set of attached fields
//! - Derive new entries with extra fields (never mutate in place)
//! - Dispatch `log`, `warn`, `panic` and `log_http`
//!
//! # Design Decisions
//! - Entries are cheap to clone: sink, classifier and fields sit behind `Arc`
//! - Enrichment copies the parent's fields, so siblings never see each other
//! - Call sites are captured with `#[track_caller]`; the recorded frame is the
//!   code that called the operation, not this module

pub mod global;
mod http;

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use serde_json::Value;

use crate::config::OnErrorConfig;
use crate::fields::{caller_fields, status_fields, Fields, Messages};
use crate::http::{Classify, StatusClassifier};
use crate::sink::{Level, Sink, TracingSink};

/// A logging context: a sink plus pre-attached fields.
#[derive(Clone)]
pub struct Entry {
    sink: Arc<dyn Sink>,
    classifier: Arc<dyn Classify>,
    fields: Arc<Fields>,
}

impl Entry {
    /// Create an entry without attached fields.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::with_sink(Arc::new(sink))
    }

    /// Create an entry over a shared sink.
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            classifier: Arc::new(StatusClassifier::default()),
            fields: Arc::new(Fields::new()),
        }
    }

    /// Create an entry around a context that already carries fields.
    pub fn with_entry(sink: Arc<dyn Sink>, fields: Fields) -> Self {
        Self {
            fields: Arc::new(fields),
            ..Self::with_sink(sink)
        }
    }

    /// Entry emitting through `tracing` with the configured classifier and exit code.
    pub fn from_config(config: &OnErrorConfig) -> Self {
        Self::new(TracingSink::from_config(&config.fatal))
            .with_classifier(StatusClassifier::from_config(&config.http))
    }

    /// Replace the policy deciding which responses are HTTP failures.
    pub fn with_classifier(self, classifier: impl Classify + 'static) -> Self {
        Self {
            classifier: Arc::new(classifier),
            ..self
        }
    }

    /// Fields attached to this entry.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// New entry with `fields` layered over the current ones.
    pub fn with_fields(&self, fields: Fields) -> Entry {
        Entry {
            sink: Arc::clone(&self.sink),
            classifier: Arc::clone(&self.classifier),
            fields: Arc::new(self.fields.layered(&fields)),
        }
    }

    pub fn with_field(&self, key: impl Into<String>, value: impl Into<Value>) -> Entry {
        let mut fields = Fields::new();
        fields.insert(key, value);
        self.with_fields(fields)
    }

    pub fn with_caller(&self, location: &str, line: u32) -> Entry {
        self.with_fields(caller_fields(location, line))
    }

    pub fn with_status(&self, status_code: u16, status: &str, messages: impl Into<Messages>) -> Entry {
        self.with_fields(status_fields(status_code, status, messages))
    }

    fn at(&self, location: &Location<'_>) -> Entry {
        self.with_caller(location.file(), location.line())
    }

    fn emit(&self, level: Level, message: &dyn fmt::Display) {
        self.sink.emit(level, &self.fields, &message.to_string());
    }

    /// Log `err` at error severity, annotated with the caller's location.
    #[track_caller]
    pub fn log<E: fmt::Display + ?Sized>(&self, err: Option<&E>) {
        if let Some(err) = err {
            self.at(Location::caller()).emit(Level::Error, &err);
        }
    }

    /// Log `err` at warning severity, annotated with the caller's location.
    #[track_caller]
    pub fn warn<E: fmt::Display + ?Sized>(&self, err: Option<&E>) {
        if let Some(err) = err {
            self.at(Location::caller()).emit(Level::Warning, &err);
        }
    }

    /// Assert that no error was given.
    ///
    /// On `Some`, the error is logged at error severity, then emitted as fatal,
    /// and the process terminates.
    #[track_caller]
    pub fn panic<E: fmt::Display + ?Sized>(&self, err: Option<&E>) {
        if let Some(err) = err {
            self.fail(err);
        }
    }

    #[track_caller]
    pub(crate) fn fail<E: fmt::Display + ?Sized>(&self, err: &E) -> ! {
        let entry = self.at(Location::caller());
        let message = err.to_string();
        entry.sink.emit(Level::Error, &entry.fields, &message);
        entry.sink.fatal(&entry.fields, &message)
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new(TracingSink::default())
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry").field("fields", &self.fields).finish_non_exhaustive()
    }
}
