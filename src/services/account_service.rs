//! Account and pocket management.
//!
//! Creation and lookup behind the HTTP surface. Transfers live in
//! [`super::transfer_service`].

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{AppError, Entity};
use crate::ledger::{self, AccountStore, Ledger, PocketStore, UnitOfWork};
use crate::models::account::CreateAccountRequest;
use crate::models::pocket::CreatePocketRequest;
use crate::models::{self, Account, MAX_BALANCE, Pocket};

/// Create a new account.
///
/// # Errors
///
/// - `InvalidRequest`: empty name, or an initial balance that is negative,
///   above `MAX_BALANCE` or has more than four decimal places
/// - `Database`: storage error occurred
pub async fn create_account<L: Ledger>(
    ledger: &L,
    request: CreateAccountRequest,
) -> Result<Account, AppError> {
    validate_name("account_name", &request.account_name)?;
    validate_initial_balance(request.initial_balance)?;

    let account = Account::new(
        request.account_name.trim(),
        request.initial_balance,
        request.status,
    );

    let mut work = ledger.begin().await?;
    let result = work.save_account(account).await;
    let account = ledger::complete(work, result).await?;

    tracing::info!(account_id = %account.id, "account created");
    Ok(account)
}

/// Get account by ID.
pub async fn get_account<L: Ledger>(ledger: &L, account_id: Uuid) -> Result<Account, AppError> {
    let mut work = ledger.begin().await?;
    let result = work.find_account(account_id).await;
    ledger::complete(work, result)
        .await?
        .ok_or(AppError::NotFound(Entity::Account))
}

/// Create a pocket owned by `account_id`.
///
/// # Errors
///
/// - `InvalidRequest`: empty name or unstorable initial balance
/// - `NotFound(Account)`: owning account doesn't exist
/// - `Database`: storage error occurred
pub async fn create_pocket<L: Ledger>(
    ledger: &L,
    account_id: Uuid,
    request: CreatePocketRequest,
) -> Result<Pocket, AppError> {
    validate_name("pocket_name", &request.pocket_name)?;
    validate_initial_balance(request.initial_balance)?;

    let pocket = Pocket::new(
        account_id,
        request.pocket_name.trim(),
        request.initial_balance,
    );

    let mut work = ledger.begin().await?;
    let result = insert_pocket(&mut work, pocket).await;
    let pocket = ledger::complete(work, result).await?;

    tracing::info!(%account_id, pocket_id = %pocket.id, "pocket created");
    Ok(pocket)
}

async fn insert_pocket<W: UnitOfWork>(work: &mut W, pocket: Pocket) -> Result<Pocket, AppError> {
    work.find_account(pocket.account_id)
        .await?
        .ok_or(AppError::NotFound(Entity::Account))?;
    work.save_pocket(pocket).await
}

/// Get pocket by ID.
pub async fn get_pocket<L: Ledger>(ledger: &L, pocket_id: Uuid) -> Result<Pocket, AppError> {
    let mut work = ledger.begin().await?;
    let result = work.find_pocket(pocket_id).await;
    ledger::complete(work, result)
        .await?
        .ok_or(AppError::NotFound(Entity::Pocket))
}

fn validate_name(field: &str, name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

fn validate_initial_balance(balance: Decimal) -> Result<(), AppError> {
    if balance < Decimal::ZERO {
        return Err(AppError::InvalidRequest(
            "initial_balance must not be negative".to_string(),
        ));
    }
    if balance > MAX_BALANCE {
        return Err(AppError::InvalidRequest(format!(
            "initial_balance must not exceed {MAX_BALANCE}"
        )));
    }
    if !models::fits_balance_scale(balance) {
        return Err(AppError::InvalidRequest(
            "initial_balance must have at most 4 decimal places".to_string(),
        ));
    }
    Ok(())
}
