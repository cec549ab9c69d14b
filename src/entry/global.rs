//! Process-wide entry and the free functions bound to it.
//!
//! The global entry is set at most once through [`init`]. Until then,
//! [`global`] lazily installs a default entry emitting through `tracing`.

use std::fmt;
use std::sync::OnceLock;

use crate::entry::Entry;
use crate::error::{HttpError, InitError};
use crate::fields::Fields;
use crate::http::HttpResponse;

static GLOBAL: OnceLock<Entry> = OnceLock::new();

/// Install the process-wide entry.
///
/// Fails if an entry was already installed, or if [`global`] was already used.
pub fn init(entry: Entry) -> Result<(), InitError> {
    GLOBAL.set(entry).map_err(|_| InitError::AlreadyInitialized)
}

/// Whether the process-wide entry has been installed, explicitly or lazily.
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// The process-wide entry.
pub fn global() -> &'static Entry {
    GLOBAL.get_or_init(Entry::default)
}

/// Derive a scoped entry from the global one.
pub fn with_fields(fields: Fields) -> Entry {
    global().with_fields(fields)
}

/// Log `err` on the global entry. See [`Entry::log`].
#[track_caller]
pub fn log<E: fmt::Display + ?Sized>(err: Option<&E>) {
    global().log(err)
}

/// Warn on the global entry. See [`Entry::warn`].
#[track_caller]
pub fn warn<E: fmt::Display + ?Sized>(err: Option<&E>) {
    global().warn(err)
}

/// Assert no error on the global entry. See [`Entry::panic`].
#[track_caller]
pub fn panic<E: fmt::Display + ?Sized>(err: Option<&E>) {
    global().panic(err)
}

/// Log an HTTP-related error on the global entry. See [`Entry::log_http`].
pub async fn log_http<E, R>(
    err: Option<E>,
    response: Option<&mut R>,
    do_not_close_body: bool,
) -> Result<(), HttpError<E>>
where
    E: fmt::Display,
    R: HttpResponse,
{
    global().log_http(err, response, do_not_close_body).await
}
