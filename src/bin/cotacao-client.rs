//! One-shot client: fetch the current dollar quotation from the quote
//! service within a 300ms budget and record the bid to `cotacao.txt`.
//!
//! Any failure (service error, undecodable body, or an elapsed budget)
//! terminates the process abnormally without touching the output file.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotacao::client::QuoteClient;
use cotacao::config::ClientConfig;
use cotacao::deadline::Outcome;
use cotacao::error::ServiceError;

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cotacao=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::default();
    let budget = config.request_budget;
    let client = QuoteClient::new(config);

    match client.fetch_bid().await {
        Outcome::Ready(summary) => {
            client.write_sink(&summary)?;
            tracing::info!(bid = %summary.bid, "Currency quote recorded");
            Ok(())
        }
        Outcome::Failed(error) => {
            tracing::error!(%error, "Quote request failed");
            Err(error)
        }
        Outcome::Expired => {
            tracing::error!(budget = ?budget, "Quote request ran past its budget");
            Err(ServiceError::DeadlineExceeded(budget))
        }
    }
}
