//! Error types and HTTP error response handling.
//!
//! This module defines all ledger errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde_json::json;

/// Kind of entity a lookup failed to resolve.
///
/// Rule 2 distinguishes the origin from the destination account so the
/// caller can tell which reference was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Account,
    Pocket,
    OriginAccount,
    DestinationAccount,
}

impl Entity {
    /// Machine-readable error code used in HTTP responses.
    pub fn code(self) -> &'static str {
        match self {
            Entity::Account => "account_not_found",
            Entity::Pocket => "pocket_not_found",
            Entity::OriginAccount => "origin_account_not_found",
            Entity::DestinationAccount => "destination_account_not_found",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Account => "account",
            Entity::Pocket => "pocket",
            Entity::OriginAccount => "origin account",
            Entity::DestinationAccount => "destination account",
        };
        f.write_str(name)
    }
}

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Lookup Errors**: a referenced account or pocket does not exist
/// - **Business Rule Errors**: the transfer violates a ledger rule
/// - **Validation Errors**: invalid amounts or request data
/// - **Database Errors**: any sqlx::Error from the PostgreSQL ledger
///
/// None of these are transient; callers correct their input instead of retrying.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A referenced entity does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("The {0} does not exist")]
    NotFound(Entity),

    /// The source balance is lower than the requested amount.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },

    /// Origin and destination of an account transfer are the same account.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Origin and destination accounts must be different")]
    SameAccount,

    /// Transfer amount is zero or negative.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Amount must be positive with at most 4 decimal places, got {0}")]
    InvalidAmount(Decimal),

    /// Crediting the destination would exceed the representable balance.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Balance overflow")]
    BalanceOverflow,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// The caller referenced an account or pocket that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// The references resolved but the transfer breaks a ledger rule.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            AppError::InsufficientFunds { .. }
                | AppError::SameAccount
                | AppError::InvalidAmount(_)
                | AppError::BalanceOverflow
        )
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `NotFound` → 404 Not Found
/// - `InsufficientFunds`, `SameAccount`, `BalanceOverflow` → 422 Unprocessable Entity
/// - `InvalidAmount`, `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound(entity) => (StatusCode::NOT_FOUND, entity.code(), self.to_string()),
            AppError::InsufficientFunds { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "insufficient_funds",
                self.to_string(),
            ),
            AppError::SameAccount => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "same_account",
                self.to_string(),
            ),
            AppError::BalanceOverflow => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "balance_overflow",
                self.to_string(),
            ),
            AppError::InvalidAmount(_) => {
                (StatusCode::BAD_REQUEST, "invalid_amount", self.to_string())
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::account(AppError::NotFound(Entity::Account), "The account does not exist")]
    #[case::pocket(AppError::NotFound(Entity::Pocket), "The pocket does not exist")]
    #[case::origin(
        AppError::NotFound(Entity::OriginAccount),
        "The origin account does not exist"
    )]
    #[case::destination(
        AppError::NotFound(Entity::DestinationAccount),
        "The destination account does not exist"
    )]
    #[case::insufficient(
        AppError::InsufficientFunds { available: dec!(100), requested: dec!(200) },
        "Insufficient funds: available 100, requested 200"
    )]
    #[case::same_account(
        AppError::SameAccount,
        "Origin and destination accounts must be different"
    )]
    #[case::invalid_amount(AppError::InvalidAmount(dec!(-5)), "Amount must be positive with at most 4 decimal places, got -5")]
    fn test_error_display(#[case] error: AppError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::not_found(AppError::NotFound(Entity::Pocket), true, false)]
    #[case::insufficient(
        AppError::InsufficientFunds { available: dec!(0), requested: dec!(1) },
        false,
        true
    )]
    #[case::same_account(AppError::SameAccount, false, true)]
    #[case::invalid_request(AppError::InvalidRequest("bad".into()), false, false)]
    fn test_error_classification(
        #[case] error: AppError,
        #[case] not_found: bool,
        #[case] business_rule: bool,
    ) {
        assert_eq!(error.is_not_found(), not_found);
        assert_eq!(error.is_business_rule(), business_rule);
    }

    #[rstest]
    #[case::not_found(AppError::NotFound(Entity::Account), StatusCode::NOT_FOUND)]
    #[case::insufficient(
        AppError::InsufficientFunds { available: dec!(0), requested: dec!(1) },
        StatusCode::UNPROCESSABLE_ENTITY
    )]
    #[case::same_account(AppError::SameAccount, StatusCode::UNPROCESSABLE_ENTITY)]
    #[case::invalid_amount(AppError::InvalidAmount(dec!(0)), StatusCode::BAD_REQUEST)]
    #[case::database(
        AppError::Database(sqlx::Error::PoolTimedOut),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn test_status_mapping(#[case] error: AppError, #[case] status: StatusCode) {
        assert_eq!(error.into_response().status(), status);
    }
}
