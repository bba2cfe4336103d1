//! Transaction API endpoints
//!
//! `POST /transactions` is the HTTP face of the transaction workflow; the
//! read endpoints go straight to the transaction store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::core::traits::{AccountStore, TransactionStore};
use crate::http::dto::{CreateTransactionRequest, TransactionResponse};
use crate::http::{ApiError, AppState};
use crate::types::{OperationKind, TransactionSummary};

pub async fn create<A, T>(
    State(state): State<AppState<A, T>>,
    Json(req): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError>
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    let kind: OperationKind = req.kind.parse().map_err(ApiError::from)?;

    let transaction = state
        .workflow
        .post_transaction(&req.account_id, req.amount, kind)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into())))
}

pub async fn list_for_account<A, T>(
    State(state): State<AppState<A, T>>,
    Path(account_id): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError>
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    let transactions = state.transactions.get_by_account(&account_id).await?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

pub async fn summary<A, T>(
    State(state): State<AppState<A, T>>,
    Path(account_id): Path<String>,
) -> Result<Json<TransactionSummary>, ApiError>
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    let summary = state.transactions.summary(&account_id).await?;
    Ok(Json(summary))
}
