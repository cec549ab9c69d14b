//! HTTP-aware error dispatch.

use std::fmt;

use crate::entry::Entry;
use crate::error::HttpError;
use crate::fields::Messages;
use crate::http::{BodyGuard, HttpResponse};
use crate::sink::Level;

impl Entry {
    /// Log an HTTP-related error.
    ///
    /// - `err` with a response: logged with `statusCode`/`status`, returned unchanged.
    /// - `err` alone: logged as-is, returned unchanged.
    /// - No `err`, failing response: the body is drained into the record's `error`
    ///   field and a [`HttpError::Status`] is returned. The body is closed on the
    ///   way out unless `do_not_close_body` is set.
    /// - Otherwise nothing is logged and `Ok(())` is returned.
    pub async fn log_http<E, R>(
        &self,
        err: Option<E>,
        response: Option<&mut R>,
        do_not_close_body: bool,
    ) -> Result<(), HttpError<E>>
    where
        E: fmt::Display,
        R: HttpResponse,
    {
        match (err, response) {
            (Some(err), Some(response)) => {
                let status = response.status();
                self.with_status(response.status_code().as_u16(), &status, Messages::None)
                    .emit(Level::Error, &err);
                Err(HttpError::Caller(err))
            }
            (Some(err), None) => {
                self.emit(Level::Error, &err);
                Err(HttpError::Caller(err))
            }
            (None, Some(response)) if self.classifier.is_error(response.status_code()) => {
                let mut response = BodyGuard::new(response, !do_not_close_body);
                let body = response.read_text().await;
                let status = response.status();

                self.with_status(
                    response.status_code().as_u16(),
                    &status,
                    Messages::Single(body.clone()),
                )
                .emit(Level::Error, &status);

                Err(HttpError::Status { status, body })
            }
            _ => Ok(()),
        }
    }
}
