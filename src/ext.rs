//! `Result` helpers reporting through the global entry.

use std::fmt;

use crate::entry::global::global;

pub trait ResultExt<T, E> {
    /// Log the error, if any, and hand the result back.
    fn log_err(self) -> Self;

    /// Warn on the error, if any, and hand the result back.
    fn warn_err(self) -> Self;

    /// Unwrap the value, or log the error and terminate the process.
    fn or_fatal(self) -> T;
}

impl<T, E: fmt::Display> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Self {
        global().log(self.as_ref().err());
        self
    }

    #[track_caller]
    fn warn_err(self) -> Self {
        global().warn(self.as_ref().err());
        self
    }

    #[track_caller]
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => global().fail(&err),
        }
    }
}
