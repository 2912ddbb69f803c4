//! Pocket data models and API request/response types.
//!
//! A pocket is a sub-balance that belongs to exactly one account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::add_to_balance;
use crate::error::AppError;

/// Represents a pocket record from the ledger.
///
/// # Database Table
///
/// Maps to the `pockets` table. `account_id` is a back-reference to the
/// owning account (foreign key), balance is non-negative.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Pocket {
    pub id: Uuid,

    /// Account this pocket belongs to
    pub account_id: Uuid,

    pub pocket_name: String,

    /// Must be >= 0 (enforced by database CHECK constraint).
    pub balance: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pocket {
    /// Build a new, not yet persisted pocket for `account_id`.
    pub fn new(account_id: Uuid, pocket_name: impl Into<String>, balance: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            pocket_name: pocket_name.into(),
            balance,
            created_at: now,
            updated_at: now,
        }
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

/// Request body for creating a pocket under an account.
///
/// ```json
/// {
///   "pocket_name": "Holidays",
///   "initial_balance": "0"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreatePocketRequest {
    pub pocket_name: String,

    #[serde(default)]
    pub initial_balance: Decimal,
}

/// Response body for pocket endpoints.
#[derive(Debug, Serialize)]
pub struct PocketResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub pocket_name: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Pocket> for PocketResponse {
    fn from(pocket: Pocket) -> Self {
        Self {
            id: pocket.id,
            account_id: pocket.account_id,
            pocket_name: pocket.pocket_name,
            balance: pocket.balance,
            created_at: pocket.created_at,
            updated_at: pocket.updated_at,
        }
    }
}
