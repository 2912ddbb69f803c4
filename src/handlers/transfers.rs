//! Transfer HTTP handlers.
//!
//! - POST /api/v1/transfers/pocket - Move money from an account into a pocket
//! - POST /api/v1/transfers/account - Move money between two accounts

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    ledger::Ledger,
    models::{
        account::AccountResponse,
        pocket::PocketResponse,
        transfer::{AccountTransferRequest, PocketTransferRequest},
    },
    services::transfer_service,
};

/// Transfer from an account to a pocket.
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": "550e8400-...",
///   "pocket_id": "660e8400-...",
///   "amount": "200"
/// }
/// ```
///
/// # Response (200)
///
/// The updated pocket.
///
/// # Errors
///
/// - 400 `invalid_amount`
/// - 404 `account_not_found` / `pocket_not_found`
/// - 422 `insufficient_funds`
pub async fn transfer_to_pocket<L: Ledger>(
    State(ledger): State<Arc<L>>,
    Json(request): Json<PocketTransferRequest>,
) -> Result<Json<PocketResponse>, AppError> {
    let pocket = transfer_service::transfer_to_pocket(
        ledger.as_ref(),
        request.account_id,
        request.pocket_id,
        request.amount,
    )
    .await?;

    Ok(Json(pocket.into()))
}

/// Transfer between two accounts.
///
/// # Response (200)
///
/// The updated destination account.
///
/// # Errors
///
/// - 400 `invalid_amount`
/// - 404 `origin_account_not_found` / `destination_account_not_found`
/// - 422 `same_account` / `insufficient_funds`
pub async fn transfer_between_accounts<L: Ledger>(
    State(ledger): State<Arc<L>>,
    Json(request): Json<AccountTransferRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = transfer_service::transfer_between_accounts(
        ledger.as_ref(),
        request.origin_account_id,
        request.destination_account_id,
        request.amount,
    )
    .await?;

    Ok(Json(account.into()))
}
