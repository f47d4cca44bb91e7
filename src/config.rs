//! Configuration for the quote service and its client.
//!
//! Every operational value (endpoints, database path, stage budgets) is
//! fixed, so there is no file loading and no CLI surface; the defaults below
//! are the configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the quote service (the inner HTTP server).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Upstream quote provider endpoint.
    pub upstream_url: String,

    /// SQLite database file, created lazily on first insert.
    pub database_path: PathBuf,

    /// Per-stage deadlines.
    pub timeouts: TimeoutConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            upstream_url: "https://economia.awesomeapi.com.br/json/last/USD-BRL".to_string(),
            database_path: PathBuf::from("./database.db"),
            timeouts: TimeoutConfig::default(),
        }
    }
}

/// Per-stage deadlines for the service's bounded operations.
///
/// The budgets are deliberately asymmetric: the network fetch gets far more
/// latency than the local write. Stages run sequentially and each gets its
/// own full budget regardless of what the previous stage consumed.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutConfig {
    /// Budget for the upstream provider fetch.
    pub upstream: Duration,

    /// Budget for the SQLite insert.
    pub persist: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            upstream: Duration::from_millis(200),
            persist: Duration::from_millis(10),
        }
    }
}

/// Configuration for the one-shot requesting client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Quote service endpoint.
    pub service_url: String,

    /// Overall budget for the call to the quote service.
    pub request_budget: Duration,

    /// File the bid line is written to, truncating prior content.
    pub output_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8080/cotacao".to_string(),
            request_budget: Duration::from_millis(300),
            output_path: PathBuf::from("cotacao.txt"),
        }
    }
}
