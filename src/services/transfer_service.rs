//! Transfer service - the two money-movement rules of the ledger.
//!
//! - Rule 1: account → pocket ([`transfer_to_pocket`])
//! - Rule 2: account → account ([`transfer_between_accounts`])
//!
//! # Atomicity Guarantees
//!
//! Both balance writes of a transfer happen in one unit of work. On any
//! failure the unit of work is rolled back before the error is returned,
//! so no partial update is ever visible.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{AppError, Entity};
use crate::ledger::{self, Ledger, UnitOfWork};
use crate::models::{self, Account, Pocket};

/// Move `amount` from an account into a pocket.
///
/// # Process
///
/// 1. Reject amounts that are not positive or exceed four decimal places
/// 2. Start unit of work
/// 3. Lock account, then pocket
/// 4. Debit account, credit pocket
/// 5. Save account, then pocket
/// 6. Commit (or rollback on error)
///
/// # Returns
///
/// The updated pocket
///
/// # Errors
///
/// Checked in this order, first failure wins:
/// - `InvalidAmount`: amount is zero, negative, or has more than four decimal places
/// - `NotFound(Account)`: account doesn't exist
/// - `NotFound(Pocket)`: pocket doesn't exist
/// - `InsufficientFunds`: account balance is below the amount
/// - `BalanceOverflow`: the pocket balance would exceed `MAX_BALANCE`
/// - `Database`: storage error occurred
///
/// The pocket need not belong to `account_id`; any existing pocket can receive.
pub async fn transfer_to_pocket<L: Ledger>(
    ledger: &L,
    account_id: Uuid,
    pocket_id: Uuid,
    amount: Decimal,
) -> Result<Pocket, AppError> {
    tracing::info!(%account_id, %pocket_id, %amount, "transfer to pocket started");
    validate_amount(amount)?;

    let mut work = ledger.begin().await?;
    let result = move_to_pocket(&mut work, account_id, pocket_id, amount).await;
    let pocket = ledger::complete(work, result).await?;

    tracing::info!(%account_id, %pocket_id, balance = %pocket.balance, "transfer to pocket completed");
    Ok(pocket)
}

async fn move_to_pocket<W: UnitOfWork>(
    work: &mut W,
    account_id: Uuid,
    pocket_id: Uuid,
    amount: Decimal,
) -> Result<Pocket, AppError> {
    let mut account = work
        .find_account(account_id)
        .await?
        .ok_or(AppError::NotFound(Entity::Account))?;

    let mut pocket = work
        .find_pocket(pocket_id)
        .await?
        .ok_or(AppError::NotFound(Entity::Pocket))?;

    account.debit(amount)?;
    pocket.credit(amount)?;

    work.save_account(account).await?;
    work.save_pocket(pocket).await
}

/// Move `amount` from one account to another.
///
/// Both rows are locked in ascending id order whichever side is the origin,
/// so two opposite transfers between the same pair cannot deadlock.
///
/// # Returns
///
/// The updated destination account
///
/// # Errors
///
/// Checked in this order, first failure wins:
/// - `InvalidAmount`: amount is zero, negative, or has more than four decimal places
/// - `NotFound(OriginAccount)`: origin doesn't exist
/// - `NotFound(DestinationAccount)`: destination doesn't exist
/// - `SameAccount`: origin and destination are the same account
/// - `InsufficientFunds`: origin balance is below the amount
/// - `BalanceOverflow`: the destination balance would exceed `MAX_BALANCE`
/// - `Database`: storage error occurred
pub async fn transfer_between_accounts<L: Ledger>(
    ledger: &L,
    origin_id: Uuid,
    destination_id: Uuid,
    amount: Decimal,
) -> Result<Account, AppError> {
    tracing::info!(%origin_id, %destination_id, %amount, "transfer between accounts started");
    validate_amount(amount)?;

    let mut work = ledger.begin().await?;
    let result = move_between_accounts(&mut work, origin_id, destination_id, amount).await;
    let destination = ledger::complete(work, result).await?;

    tracing::info!(%origin_id, %destination_id, balance = %destination.balance, "transfer between accounts completed");
    Ok(destination)
}

async fn move_between_accounts<W: UnitOfWork>(
    work: &mut W,
    origin_id: Uuid,
    destination_id: Uuid,
    amount: Decimal,
) -> Result<Account, AppError> {
    let (first_id, second_id) = if origin_id <= destination_id {
        (origin_id, destination_id)
    } else {
        (destination_id, origin_id)
    };

    let first = work.find_account(first_id).await?;
    let second = if second_id == first_id {
        first.clone()
    } else {
        work.find_account(second_id).await?
    };

    let (origin, destination) = if first_id == origin_id {
        (first, second)
    } else {
        (second, first)
    };

    let mut origin = origin.ok_or(AppError::NotFound(Entity::OriginAccount))?;
    let mut destination = destination.ok_or(AppError::NotFound(Entity::DestinationAccount))?;

    if origin_id == destination_id {
        return Err(AppError::SameAccount);
    }

    origin.debit(amount)?;
    destination.credit(amount)?;

    work.save_account(origin).await?;
    work.save_account(destination).await
}

/// Amounts must be positive and storable without rounding.
fn validate_amount(amount: Decimal) -> Result<(), AppError> {
    if amount <= Decimal::ZERO || !models::fits_balance_scale(amount) {
        return Err(AppError::InvalidAmount(amount));
    }
    Ok(())
}
