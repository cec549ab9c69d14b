//! Response status classification.
//!
//! # Design Decisions
//! - Client (4xx) and server (5xx) errors are failures by default
//! - The bounds come from configuration; callers may plug any predicate

use hyper::StatusCode;

use crate::config::HttpConfig;

/// Decides whether a status represents an HTTP-level failure.
pub trait Classify: Send + Sync {
    fn is_error(&self, status: StatusCode) -> bool;
}

impl<F> Classify for F
where
    F: Fn(StatusCode) -> bool + Send + Sync,
{
    fn is_error(&self, status: StatusCode) -> bool {
        self(status)
    }
}

/// Classifier treating an inclusive range of status codes as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusClassifier {
    min: u16,
    max: u16,
}

impl StatusClassifier {
    pub fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    pub fn from_config(config: &HttpConfig) -> Self {
        Self::new(config.error_status_min, config.error_status_max)
    }
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::from_config(&HttpConfig::default())
    }
}

impl Classify for StatusClassifier {
    fn is_error(&self, status: StatusCode) -> bool {
        (self.min..=self.max).contains(&status.as_u16())
    }
}
