//! HTTP server setup and request orchestration.
//!
//! # Responsibilities
//! - Create the Axum router with the single quote route
//! - Wire up middleware (tracing)
//! - Serve until the shutdown signal fires
//! - Run the bounded fetch and persist stages per request
//!
//! # Design Decisions
//! - The quote route answers every method, matching the original mux
//!   behavior; only unknown paths 404
//! - Stages run strictly in sequence, each with its own fixed budget;
//!   persistence success gates the response
//! - Failure detail stays in the logs; callers only see an empty 500

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::deadline::{run_with_deadline, Outcome};
use crate::error::ServiceError;
use crate::storage::QuoteStore;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    pub store: QuoteStore,
    pub config: ServiceConfig,
}

/// HTTP server for the quote service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let upstream = UpstreamClient::new(&config.upstream_url, config.timeouts.upstream);
        let store = QuoteStore::new(&config.database_path);

        let state = AppState {
            upstream,
            store,
            config: config.clone(),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/cotacao", any(quote_handler))
            .fallback(not_found)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Handler for the quote route: bounded fetch, bounded persist, reply.
async fn quote_handler(State(state): State<AppState>) -> Response {
    let upstream = state.upstream.clone();
    let fetched = run_with_deadline(state.config.timeouts.upstream, async move {
        upstream.fetch_latest().await
    })
    .await;

    let quote = match fetched {
        Outcome::Ready(quote) => quote,
        Outcome::Failed(error) => {
            tracing::error!(%error, "Upstream fetch failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        Outcome::Expired => {
            tracing::error!(
                budget = ?state.config.timeouts.upstream,
                "Upstream fetch ran past its budget"
            );
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let store = state.store.clone();
    let row = quote.usd_brl.clone();
    let persisted = run_with_deadline(state.config.timeouts.persist, async move {
        // The insert blocks on SQLite; an abandoned insert finishes on the
        // blocking pool without touching the response.
        tokio::task::spawn_blocking(move || store.insert(&row))
            .await
            .map_err(|_| ServiceError::WorkerGone)?
    })
    .await;

    match persisted {
        Outcome::Ready(()) => Json(quote.usd_brl).into_response(),
        Outcome::Failed(error) => {
            tracing::error!(%error, "Persisting the quote failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Outcome::Expired => {
            tracing::error!(
                budget = ?state.config.timeouts.persist,
                "Persisting the quote ran past its budget"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Fallback for unknown paths: no upstream call, no persistence.
async fn not_found(uri: Uri) -> StatusCode {
    tracing::warn!(path = %uri.path(), "No route matched");
    StatusCode::NOT_FOUND
}
