//! NoteStore Server Binary
//!
//! Starts the HTTP server for NoteStore.

use std::sync::Arc;

use clap::Parser;
use notestore::http::Server;
use notestore::{Config, NoteStore};
use tracing_subscriber::{fmt, EnvFilter};

/// NoteStore Server
#[derive(Parser, Debug)]
#[command(name = "notestore-server")]
#[command(about = "Minimal note-taking HTTP/JSON API")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, env = "NOTESTORE_LISTEN", default_value = "127.0.0.1:8080")]
    listen: String,

    /// Maximum request body size in bytes
    #[arg(short = 'b', long, env = "NOTESTORE_MAX_BODY_BYTES", default_value = "1048576")]
    max_body_bytes: usize,

    /// Id assigned to the first created note
    #[arg(long, env = "NOTESTORE_FIRST_ID", default_value = "1")]
    first_id: i64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,notestore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("NoteStore Server v{}", notestore::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .max_body_bytes(args.max_body_bytes)
        .first_id(args.first_id)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    // The store lives for the whole process; nothing is persisted on exit
    let store = Arc::new(NoteStore::with_first_id(config.first_id));

    tracing::info!("Store initialized, first id {}", config.first_id);

    let server = Server::new(config, store);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
