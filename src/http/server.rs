//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Build the Axum router around `ServeDir` (the file-serving component)
//! - Wire up the access-log middleware
//! - Bind the TCP listener, distinguishing bind failures from serve failures
//! - Serve until the shutdown future resolves
//!
//! # State Machine
//! ```text
//! Unbound ──bind──▶ Bound&Serving ──shutdown future / fatal error──▶ Closed
//! ```
//! A signal-triggered shutdown resolves the future passed to [`Server::serve`],
//! which closes the listener and makes `serve` return `Ok(())`; any `Err` out
//! of the serving loop is an unexpected fatal failure.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::http::access_log::AccessLogLayer;

/// Error type for server operations.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Failed to bind the listen address (in use, permission, invalid host).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The serving loop failed after a successful bind.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Build the router: every path falls through to the file server, and the
/// whole thing is wrapped in the access-log layer.
pub fn router(root: &Path, access_log: AccessLogLayer) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(access_log)
}

/// A bound, not-yet-serving HTTP server.
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    /// Bind the configured address and assemble the handler chain.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServeError> {
        let addr = config.bind_address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServeError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!(
            address = %addr,
            root = %config.root.display(),
            "listener bound"
        );

        Ok(Self {
            listener,
            router: router(&config.root, AccessLogLayer::new()),
        })
    }

    /// The address actually bound (resolves port 0 to the assigned port).
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` resolves. Each connection is handled on its own
    /// task; the access-log middleware sees the peer address via
    /// `ConnectInfo`.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), ServeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}
