//! Bank Engine server binary
//!
//! Starts the HTTP API backed by the in-memory reference stores.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --listen 127.0.0.1:9000
//! BANK_LOG=bank_engine=debug cargo run
//! ```
//!
//! Stores are constructed once here and passed explicitly into the
//! workflow and the router; nothing reads them through globals.

use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bank_engine::core::{MemoryAccountStore, MemoryTransactionStore, TransactionWorkflow};
use bank_engine::{cli, http};

#[tokio::main]
async fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let accounts = Arc::new(MemoryAccountStore::new());
    let transactions = Arc::new(MemoryTransactionStore::new());
    let workflow = Arc::new(TransactionWorkflow::new(
        Arc::clone(&accounts),
        Arc::clone(&transactions),
    ));

    let app = http::router(http::AppState {
        workflow,
        accounts,
        transactions,
    });

    let listener = match tokio::net::TcpListener::bind(args.listen).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error: failed to bind {}: {}", args.listen, e);
            process::exit(1);
        }
    };

    tracing::info!(addr = %args.listen, "server listening");

    if let Err(e) = http::run(listener, app).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
