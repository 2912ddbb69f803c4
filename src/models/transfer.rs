//! Transfer request types.
//!
//! Responses reuse `PocketResponse` / `AccountResponse`: each transfer
//! returns the updated destination.

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// Request to move money from an account into one of its pockets.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "pocket_id": "660e8400-e29b-41d4-a716-446655440001",
///   "amount": "200.00"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct PocketTransferRequest {
    /// Account to take money from (will decrease)
    pub account_id: Uuid,

    /// Pocket to put money into (will increase)
    pub pocket_id: Uuid,

    /// Amount to move, must be positive
    pub amount: Decimal,
}

/// Request to move money between two accounts.
///
/// # JSON Example
///
/// ```json
/// {
///   "origin_account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "destination_account_id": "660e8400-e29b-41d4-a716-446655440001",
///   "amount": "250"
/// }
/// ```
///
/// # Atomicity Guarantee
///
/// BOTH accounts are updated in the same unit of work.
#[derive(Debug, Deserialize)]
pub struct AccountTransferRequest {
    pub origin_account_id: Uuid,
    pub destination_account_id: Uuid,
    pub amount: Decimal,
}
