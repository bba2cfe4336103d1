//! Account API endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::traits::{AccountStore, TransactionStore};
use crate::http::dto::{AccountResponse, CreateAccountRequest};
use crate::http::{ApiError, AppState};
use crate::types::{AccountUpdate, BankError, NewAccount};

fn validate_currency(currency: &str) -> Result<(), BankError> {
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(BankError::invalid_request(
            "currency must be a 3-letter code",
        ));
    }
    Ok(())
}

pub async fn create<A, T>(
    State(state): State<AppState<A, T>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError>
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    if req.name.trim().is_empty() {
        return Err(BankError::invalid_request("name is required").into());
    }
    validate_currency(&req.currency)?;
    if req.balance < Decimal::ZERO {
        return Err(BankError::invalid_amount(req.balance).into());
    }

    let account = state
        .accounts
        .create(NewAccount {
            name: req.name,
            balance: req.balance,
            currency: req.currency.to_ascii_uppercase(),
        })
        .await?;

    info!(account_id = %account.id, "account created");
    Ok((StatusCode::CREATED, Json(account.into())))
}

pub async fn list<A, T>(
    State(state): State<AppState<A, T>>,
) -> Result<Json<Vec<AccountResponse>>, ApiError>
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    let accounts = state.accounts.get_all().await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

pub async fn get_by_id<A, T>(
    State(state): State<AppState<A, T>>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError>
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    let account = state.accounts.get_by_id(&id).await?;
    Ok(Json(account.into()))
}

pub async fn update<A, T>(
    State(state): State<AppState<A, T>>,
    Path(id): Path<String>,
    Json(req): Json<AccountUpdate>,
) -> Result<Json<AccountResponse>, ApiError>
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(BankError::invalid_request("name is required").into());
        }
    }
    if let Some(currency) = &req.currency {
        validate_currency(currency)?;
    }

    let account = state.accounts.update(&id, req).await?;
    Ok(Json(account.into()))
}

pub async fn remove<A, T>(
    State(state): State<AppState<A, T>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    A: AccountStore + 'static,
    T: TransactionStore + 'static,
{
    state.accounts.delete(&id).await?;
    info!(account_id = %id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
