//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use staticd::config::ServerConfig;
use staticd::http::Server;

/// Bind a server on an ephemeral loopback port, start serving it on a
/// background task, and return the bound address.
pub async fn start_server(root: &Path) -> SocketAddr {
    let config = ServerConfig::new(root.to_str().unwrap(), "127.0.0.1".into(), 0);
    let server = Server::bind(&config).await.unwrap();
    let addr = server.local_addr().unwrap();

    tokio::spawn(async move {
        server.serve(std::future::pending()).await.unwrap();
    });

    addr
}
