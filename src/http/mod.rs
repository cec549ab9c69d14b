//! HTTP response handling.
//!
//! # Data Flow
//! ```text
//! completed response
//!     → classify.rs (is the status a failure?)
//!     → BodyGuard (close scheduled before any fallible work)
//!     → HttpResponse::read_body (drained to text, failures become "")
//! ```
//!
//! # Design Decisions
//! - The crate never performs requests; it only reacts to completed ones
//! - Classification policy lives behind a trait
//! - Body release is tied to a drop guard so it runs exactly once

pub mod classify;
pub mod remote;

use std::future::Future;
use std::io;
use std::ops::{Deref, DerefMut};

pub use classify::{Classify, StatusClassifier};
pub use hyper::StatusCode;
pub use remote::RemoteResponse;

/// Build a status line such as `404 Not Found`.
///
/// `reason` is the phrase received on the wire; without one the canonical
/// reason is used, and codes with no canonical reason yield the bare number.
pub fn status_line(status: StatusCode, reason: Option<&str>) -> String {
    match reason.or_else(|| status.canonical_reason()) {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// A completed HTTP response as seen by the error dispatcher.
pub trait HttpResponse {
    /// Numeric status.
    fn status_code(&self) -> StatusCode;

    /// Human-readable status line, e.g. `404 Not Found`.
    fn status(&self) -> String {
        status_line(self.status_code(), None)
    }

    /// Drain the remaining body.
    fn read_body(&mut self) -> impl Future<Output = io::Result<Vec<u8>>> + Send;

    /// Release the body. Reads after this point fail.
    fn close_body(&mut self);
}

/// A RAII guard that closes the response body when dropped.
///
/// With `close_on_drop` unset the guard only lends the response.
pub struct BodyGuard<'a, R: HttpResponse> {
    response: &'a mut R,
    close_on_drop: bool,
}

impl<'a, R: HttpResponse> BodyGuard<'a, R> {
    pub fn new(response: &'a mut R, close_on_drop: bool) -> Self {
        Self {
            response,
            close_on_drop,
        }
    }

    /// Read the whole body as text. Read failures yield an empty string.
    pub async fn read_text(&mut self) -> String {
        match self.response.read_body().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        }
    }
}

impl<R: HttpResponse> Deref for BodyGuard<'_, R> {
    type Target = R;
    fn deref(&self) -> &Self::Target {
        self.response
    }
}

impl<R: HttpResponse> DerefMut for BodyGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.response
    }
}

impl<R: HttpResponse> Drop for BodyGuard<'_, R> {
    fn drop(&mut self) {
        if self.close_on_drop {
            self.response.close_body();
        }
    }
}
