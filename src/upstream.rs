//! Upstream quote provider client.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::quote::CurrencyQuote;

/// HTTP client for the currency quote provider.
///
/// Holds the process-wide `reqwest::Client`; cloning shares the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    url: String,
}

impl UpstreamClient {
    /// Create a client for the given provider URL.
    ///
    /// `budget` doubles as the transport-level request timeout, so a fetch
    /// abandoned by its waiter also cancels at the connection level instead
    /// of lingering on the pool.
    pub fn new(url: impl Into<String>, budget: Duration) -> Self {
        // A proxied detour would eat the whole budget before the first byte.
        let client = Client::builder()
            .timeout(budget)
            .no_proxy()
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetch the latest quotation. Single attempt, no retry.
    pub async fn fetch_latest(&self) -> Result<CurrencyQuote> {
        tracing::info!(url = %self.url, "Requesting currency quote");

        let quote = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<CurrencyQuote>()
            .await?;

        Ok(quote)
    }
}
