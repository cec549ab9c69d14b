//! Error types returned by the crate.

use thiserror::Error;

/// Outcome of [`Entry::log_http`](crate::Entry::log_http) when something failed.
#[derive(Debug, Error)]
pub enum HttpError<E> {
    /// The error passed in by the caller, returned unchanged.
    #[error("{0}")]
    Caller(E),

    /// A failure status that arrived without a caller error.
    #[error("ERROR: {status}\n\t{body}")]
    Status { status: String, body: String },
}

impl<E> HttpError<E> {
    /// The caller's original error, if this wraps one.
    pub fn into_caller(self) -> Option<E> {
        match self {
            HttpError::Caller(err) => Some(err),
            HttpError::Status { .. } => None,
        }
    }

    pub fn is_status(&self) -> bool {
        matches!(self, HttpError::Status { .. })
    }
}

/// Errors raised while installing process-wide state.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("global entry already initialized")]
    AlreadyInitialized,

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err: HttpError<std::io::Error> = HttpError::Status {
            status: "503 Service Unavailable".into(),
            body: "try later".into(),
        };
        assert_eq!(err.to_string(), "ERROR: 503 Service Unavailable\n\ttry later");
        assert!(err.is_status());
        assert!(err.into_caller().is_none());
    }

    #[test]
    fn test_caller_error_is_transparent() {
        let err = HttpError::Caller(std::io::Error::other("connection reset"));
        assert_eq!(err.to_string(), "connection reset");
        assert!(!err.is_status());
        assert_eq!(err.into_caller().unwrap().to_string(), "connection reset");
    }
}
