//! Adapter for responses received with `reqwest`.

use std::future::Future;
use std::io;

use hyper::ext::ReasonPhrase;
use hyper::StatusCode;

use crate::http::{status_line, HttpResponse};

/// A `reqwest::Response` whose body can be closed explicitly.
///
/// Closing drops the inner response, which releases the connection.
/// The status line keeps the reason phrase the server sent.
#[derive(Debug)]
pub struct RemoteResponse {
    status: StatusCode,
    status_line: String,
    inner: Option<reqwest::Response>,
}

impl RemoteResponse {
    pub fn new(response: reqwest::Response) -> Self {
        let status = response.status();
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned());

        Self {
            status,
            status_line: status_line(status, reason.as_deref()),
            inner: Some(response),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Give back the inner response, unless the body was closed.
    pub fn into_inner(self) -> Option<reqwest::Response> {
        self.inner
    }
}

impl From<reqwest::Response> for RemoteResponse {
    fn from(response: reqwest::Response) -> Self {
        Self::new(response)
    }
}

impl HttpResponse for RemoteResponse {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn status(&self) -> String {
        self.status_line.clone()
    }

    fn read_body(&mut self) -> impl Future<Output = io::Result<Vec<u8>>> + Send {
        async move {
            let response = self
                .inner
                .as_mut()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "response body closed"))?;

            let mut body = Vec::new();
            while let Some(chunk) = response.chunk().await.map_err(io::Error::other)? {
                body.extend_from_slice(&chunk);
            }
            Ok::<_, io::Error>(body)
        }
    }

    fn close_body(&mut self) {
        self.inner.take();
    }
}
