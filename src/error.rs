//! Error types shared by the quote service and its client.

use std::time::Duration;

use thiserror::Error;

/// Unified error type for the quote pipeline.
///
/// Every variant is terminal for the request or process it occurs in: the
/// service maps them all to an empty 500, the client exits with them.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Outbound HTTP request failed: connect error, non-2xx status, or an
    /// undecodable body.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// SQLite open, schema, or insert failure.
    #[error("storage operation failed: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A bounded operation ran past its budget.
    #[error("deadline of {0:?} elapsed")]
    DeadlineExceeded(Duration),

    /// The worker task ended without delivering a result.
    #[error("worker finished without delivering a result")]
    WorkerGone,

    /// Writing the output file failed.
    #[error("failed to write quote file: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result alias with `ServiceError` as the default error.
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;
