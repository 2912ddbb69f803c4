//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::add_to_balance;
use crate::error::AppError;

/// Status label given to new accounts when the request does not name one.
pub const DEFAULT_STATUS: &str = "ACTIVE";

/// Represents an account record from the ledger.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account:
/// - Holds a non-negative decimal balance
/// - Carries a free-form status label (not checked by transfers)
/// - May own any number of pockets
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Human-readable name for this account
    pub account_name: String,

    /// Current balance
    ///
    /// Must be >= 0 (enforced by database CHECK constraint).
    pub balance: Decimal,

    /// State label, e.g. "ACTIVE"
    pub status: String,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of last balance update
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Build a new, not yet persisted account.
    pub fn new(account_name: impl Into<String>, balance: Decimal, status: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_name: account_name.into(),
            balance,
            status: status.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Take `amount` out of the balance.
    ///
    /// # Errors
    ///
    /// - `InsufficientFunds`: balance is lower than `amount`; the balance is left untouched
    pub fn debit(&mut self, amount: Decimal) -> Result<(), AppError> {
        if self.balance < amount {
            return Err(AppError::InsufficientFunds {
                available: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Add `amount` to the balance.
    ///
    /// # Errors
    ///
    /// - `BalanceOverflow`: the result would exceed [`MAX_BALANCE`](super::MAX_BALANCE); the balance is left untouched
    pub fn credit(&mut self, amount: Decimal) -> Result<(), AppError> {
        self.balance = add_to_balance(self.balance, amount)?;
        Ok(())
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_name": "Main account",
///   "status": "ACTIVE",
///   "initial_balance": "500.00"
/// }
/// ```
///
/// # Validation
///
/// - `account_name`: Required, non-empty
/// - `status`: Optional, defaults to "ACTIVE"
/// - `initial_balance`: Optional, defaults to 0, must not be negative
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub account_name: String,

    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub initial_balance: Decimal,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "account_name": "Main account",
///   "balance": "300.00",
///   "status": "ACTIVE",
///   "created_at": "2025-12-20T10:00:00Z",
///   "updated_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub account_name: String,
    pub balance: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_name: account.account_name,
            balance: account.balance,
            status: account.status,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
