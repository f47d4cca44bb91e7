//! One-shot requesting client for the quote service.

use reqwest::Client;

use crate::config::ClientConfig;
use crate::deadline::{run_with_deadline, Outcome};
use crate::error::Result;
use crate::quote::QuoteSummary;

/// Client that fetches one quotation from the quote service and records the
/// bid to a file.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: Client,
    config: ClientConfig,
}

impl QuoteClient {
    /// Create a client from its configuration.
    pub fn new(config: ClientConfig) -> Self {
        // The service lives on localhost; never detour through a proxy.
        let client = Client::builder()
            .timeout(config.request_budget)
            .no_proxy()
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Fetch the current bid within the configured budget.
    pub async fn fetch_bid(&self) -> Outcome<QuoteSummary> {
        tracing::info!(url = %self.config.service_url, "Requesting currency quote");

        let client = self.client.clone();
        let url = self.config.service_url.clone();
        run_with_deadline(self.config.request_budget, async move {
            let summary = client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<QuoteSummary>()
                .await?;
            Ok(summary)
        })
        .await
    }

    /// Write the bid line to the output file, truncating prior content.
    pub fn write_sink(&self, summary: &QuoteSummary) -> Result<()> {
        tracing::info!(
            path = %self.config.output_path.display(),
            "Storing currency quote in file"
        );

        std::fs::write(&self.config.output_path, format!("Dólar: {}", summary.bid))?;
        Ok(())
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_writes_bid_line_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");
        std::fs::write(&path, "stale content that is much longer").unwrap();

        let client = QuoteClient::new(ClientConfig {
            output_path: path.clone(),
            ..ClientConfig::default()
        });
        client
            .write_sink(&QuoteSummary { bid: "5.25".into() })
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dólar: 5.25");
    }
}
