//! HTTP Server
//!
//! Binds a listener and serves the router until shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::Result;
use crate::store::NoteStore;

/// HTTP server for NoteStore
pub struct Server {
    config: Config,
    store: Arc<NoteStore>,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<NoteStore>) -> Self {
        Self { config, store }
    }

    /// Build the router this server serves
    pub fn router(&self) -> Router {
        super::router(Arc::clone(&self.store), self.config.max_body_bytes)
    }

    /// Bind the configured address and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Listening on {}", listener.local_addr()?);

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on `listener` until `shutdown` resolves
    ///
    /// In-flight requests are allowed to complete.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server stopped accepting connections");
        Ok(())
    }

    /// Get the shared store
    pub fn store(&self) -> &Arc<NoteStore> {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
