//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use onerror::http::StatusCode;
use onerror::{Entry, Fields, HttpResponse, Level, Sink};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Panic payload used by [`CaptureSink::terminate`].
pub const TERMINATED: &str = "process terminated";

/// One emitted record.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub fields: Fields,
    pub message: String,
}

/// Sink that keeps every record in memory. Terminating panics instead of exiting.
#[derive(Default)]
pub struct CaptureSink {
    records: Mutex<Vec<Record>>,
}

impl CaptureSink {
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

impl Sink for CaptureSink {
    fn emit(&self, level: Level, fields: &Fields, message: &str) {
        self.records.lock().unwrap().push(Record {
            level,
            fields: fields.clone(),
            message: message.to_string(),
        });
    }

    fn terminate(&self) -> ! {
        std::panic::panic_any(TERMINATED)
    }
}

/// Entry over a fresh capture sink.
pub fn capture_entry() -> (Arc<CaptureSink>, Entry) {
    let sink = Arc::new(CaptureSink::default());
    let entry = Entry::with_sink(sink.clone());
    (sink, entry)
}

/// In-memory response counting how often its body was closed.
pub struct MockResponse {
    pub status: StatusCode,
    pub body: io::Result<Vec<u8>>,
    pub closes: Arc<AtomicUsize>,
}

impl MockResponse {
    pub fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: Ok(body.as_bytes().to_vec()),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A response whose body read fails.
    pub fn broken(status: StatusCode) -> Self {
        Self {
            status,
            body: Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset")),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl HttpResponse for MockResponse {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn read_body(&mut self) -> impl Future<Output = io::Result<Vec<u8>>> + Send {
        let body = match &self.body {
            Ok(bytes) => Ok(bytes.clone()),
            Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
        };
        async move { body }
    }

    fn close_body(&mut self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Start a programmable mock backend returning `(status, body)` per request.
pub async fn start_programmable_backend<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let f = Arc::new(f);
    start_raw_backend(addr, move || {
        let f = f.clone();
        async move {
            let (status, body) = f().await;
            let status_line = match status {
                200 => "200 OK",
                404 => "404 Not Found",
                429 => "429 Too Many Requests",
                500 => "500 Internal Server Error",
                502 => "502 Bad Gateway",
                503 => "503 Service Unavailable",
                _ => "200 OK",
            };
            (status_line.to_string(), body)
        }
    })
    .await;
}

/// Backend that answers with a fixed status line, reason phrase included.
pub async fn start_status_line_backend(
    addr: SocketAddr,
    status_line: &'static str,
    body: &'static str,
) {
    start_raw_backend(addr, move || async move {
        (status_line.to_string(), body.to_string())
    })
    .await;
}

async fn start_raw_backend<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (String, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let (status_line, body) = f().await;
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}
