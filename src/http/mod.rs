//! HTTP subsystem for the quote service.
//!
//! # Data Flow
//! ```text
//! GET /cotacao
//!     → server.rs (Axum setup, route dispatch)
//!     → bounded upstream fetch (200ms budget)
//!     → bounded SQLite insert (10ms budget)
//!     → 200 + quote JSON, or empty 500
//! ```

pub mod server;

pub use server::HttpServer;
