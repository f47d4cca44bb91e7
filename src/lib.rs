//! Deadline-bounded currency quote pipeline.
//!
//! Two cooperating binaries built on one library:
//!
//! ```text
//! cotacao-client ──300ms──▶ quote service ──200ms──▶ upstream provider
//!       │                        │
//!       ▼                        └──10ms──▶ SQLite (currency_quote)
//!   cotacao.txt
//! ```
//!
//! Every hop is a bounded operation: the work runs on its own task and is
//! raced against a fixed deadline, yielding exactly one outcome. A hop that
//! misses its deadline is abandoned, never awaited.

pub mod client;
pub mod config;
pub mod deadline;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod quote;
pub mod storage;
pub mod upstream;

pub use config::{ClientConfig, ServiceConfig};
pub use error::{Result, ServiceError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
