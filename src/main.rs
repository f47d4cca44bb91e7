//! Quote service entrypoint.
//!
//! Serves `GET /cotacao`: fetches the current USD→BRL quotation from the
//! upstream provider under a 200ms budget, persists it to SQLite under a
//! 10ms budget, and replies with the quotation JSON. Any stage failure is an
//! empty 500.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotacao::config::ServiceConfig;
use cotacao::http::HttpServer;
use cotacao::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cotacao=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::default();

    tracing::info!(
        bind_address = %config.bind_address,
        upstream_url = %config.upstream_url,
        database_path = %config.database_path.display(),
        fetch_budget_ms = config.timeouts.upstream.as_millis() as u64,
        persist_budget_ms = config.timeouts.persist.as_millis() as u64,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config);
    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
