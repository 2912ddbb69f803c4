//! Account and pocket HTTP handlers.
//!
//! This module implements the entity API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts/{id} - Get account by ID
//! - POST /api/v1/accounts/{id}/pockets - Create pocket under an account
//! - GET /api/v1/pockets/{id} - Get pocket by ID

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    ledger::Ledger,
    models::{
        account::{AccountResponse, CreateAccountRequest},
        pocket::{CreatePocketRequest, PocketResponse},
    },
    services::account_service,
};

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_name": "Main account",
///   "initial_balance": "500"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account
/// - **Error (400)**: Empty name or negative initial balance
pub async fn create_account<L: Ledger>(
    State(ledger): State<Arc<L>>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let account = account_service::create_account(ledger.as_ref(), request).await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (404)**: Account not found
pub async fn get_account<L: Ledger>(
    State(ledger): State<Arc<L>>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = account_service::get_account(ledger.as_ref(), account_id).await?;

    Ok(Json(account.into()))
}

/// Create a pocket owned by the account in the path.
///
/// # Request Body
///
/// ```json
/// {
///   "pocket_name": "Holidays"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created pocket
/// - **Error (404)**: Account not found
pub async fn create_pocket<L: Ledger>(
    State(ledger): State<Arc<L>>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<CreatePocketRequest>,
) -> Result<(StatusCode, Json<PocketResponse>), AppError> {
    let pocket = account_service::create_pocket(ledger.as_ref(), account_id, request).await?;

    Ok((StatusCode::CREATED, Json(pocket.into())))
}

/// Get a specific pocket by ID.
pub async fn get_pocket<L: Ledger>(
    State(ledger): State<Arc<L>>,
    Path(pocket_id): Path<Uuid>,
) -> Result<Json<PocketResponse>, AppError> {
    let pocket = account_service::get_pocket(ledger.as_ref(), pocket_id).await?;

    Ok(Json(pocket.into()))
}
