//! HTTP adapter
//!
//! Axum surface over the workflow and the stores. The adapter owns no
//! business rules: validation happens at the boundary, everything else is
//! delegated, and [`ApiError`] maps the core error taxonomy onto status
//! codes. State is injected explicitly when the router is built; there is
//! no ambient or global store handle.
//!
//! # Routes
//!
//! | Method | Path                                  | Handler                      |
//! |--------|---------------------------------------|------------------------------|
//! | GET    | `/`                                   | service index                |
//! | GET    | `/health`                             | health probe                 |
//! | POST   | `/accounts`                           | create account               |
//! | GET    | `/accounts`                           | list accounts                |
//! | GET    | `/accounts/{id}`                      | get account                  |
//! | PATCH  | `/accounts/{id}`                      | patch account metadata       |
//! | DELETE | `/accounts/{id}`                      | delete account               |
//! | GET    | `/accounts/{id}/transactions`         | list account transactions    |
//! | GET    | `/accounts/{id}/transactions/summary` | summarize account history    |
//! | POST   | `/transactions`                       | post deposit/withdrawal      |

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::core::traits::{AccountStore, TransactionStore};
use crate::core::workflow::TransactionWorkflow;

mod accounts;
pub mod dto;
mod error;
mod transactions;

pub use error::ApiError;

/// Shared handler state
///
/// Holds the workflow plus direct store handles for the read/CRUD
/// endpoints that bypass the workflow.
#[derive(Debug)]
pub struct AppState<A, T> {
    pub workflow: Arc<TransactionWorkflow<A, T>>,
    pub accounts: Arc<A>,
    pub transactions: Arc<T>,
}

// Manual impl: `#[derive(Clone)]` would require `A: Clone` and `T: Clone`
// even though only the Arcs are cloned.
impl<A, T> Clone for AppState<A, T> {
    fn clone(&self) -> Self {
        Self {
            workflow: Arc::clone(&self.workflow),
            accounts: Arc::clone(&self.accounts),
            transactions: Arc::clone(&self.transactions),
        }
    }
}

async fn index() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the application router over the given state
pub fn router<A, T>(state: AppState<A, T>) -> Router
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route(
            "/accounts",
            get(accounts::list::<A, T>).post(accounts::create::<A, T>),
        )
        .route(
            "/accounts/{id}",
            get(accounts::get_by_id::<A, T>)
                .patch(accounts::update::<A, T>)
                .delete(accounts::remove::<A, T>),
        )
        .route(
            "/accounts/{id}/transactions",
            get(transactions::list_for_account::<A, T>),
        )
        .route(
            "/accounts/{id}/transactions/summary",
            get(transactions::summary::<A, T>),
        )
        .route("/transactions", post(transactions::create::<A, T>))
        .with_state(state)
}

/// Serve the router until ctrl-c
pub async fn run(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
