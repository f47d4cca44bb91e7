//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use cotacao::config::ServiceConfig;
use cotacao::http::HttpServer;
use cotacao::lifecycle::Shutdown;

/// Start a programmable mock quote provider on an ephemeral port.
///
/// Every connection gets the status/body pair produced by `f`, which may
/// sleep first to simulate a slow provider. Returns the bound address.
pub async fn start_mock_provider<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Drain the request head before replying so the
                        // close below cannot race the client's send.
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Spawn the quote service on an ephemeral port.
///
/// The listener is bound before the server task starts, so requests issued
/// right away queue in the accept backlog instead of being refused.
pub async fn start_service(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    (addr, shutdown)
}

/// A provider payload carrying the given bid.
pub fn provider_payload(bid: &str) -> String {
    format!(
        r#"{{"USDBRL":{{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.2907","low":"5.2406","varBid":"0.0291","pctChange":"0.55","bid":"{}","ask":"5.2865","timestamp":"1628871285","create_date":"2021-08-13 13:14:45"}}}}"#,
        bid
    )
}
