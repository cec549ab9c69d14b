//! Structured error reporting.
//!
//! Attaches call-site and HTTP status metadata to errors before they are
//! logged, and turns failing HTTP responses into errors.
//!
//! ```text
//!  caller error / response
//!        │
//!        ▼
//!  ┌────────────┐    ┌──────────────┐    ┌────────────┐
//!  │ dispatcher │───▶│ field builder│───▶│   Entry    │──▶ Sink (tracing)
//!  │ log / warn │    │ caller/status│    │ (layered   │
//!  │ panic/http │    └──────────────┘    │  fields)   │
//!  └────────────┘                        └────────────┘
//! ```
//!
//! Free functions ([`log`], [`warn`], [`panic`], [`log_http`]) act on the
//! process-wide entry; [`Entry`] offers the same operations on a scoped
//! context.

pub mod config;
pub mod entry;
pub mod error;
pub mod ext;
pub mod fields;
pub mod http;
pub mod observability;
pub mod sink;

pub use config::OnErrorConfig;
pub use entry::global::{global, init, is_initialized, log, log_http, panic, warn, with_fields};
pub use entry::Entry;
pub use error::{HttpError, InitError};
pub use ext::ResultExt;
pub use fields::{Fields, Messages};
pub use http::{HttpResponse, RemoteResponse};
pub use sink::{Level, Sink, TracingSink};
