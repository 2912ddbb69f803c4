//! Data models representing ledger entities and API payloads.

use rust_decimal::Decimal;

use crate::error::AppError;

/// Ledger account model
pub mod account;
/// Account-owned pocket model
pub mod pocket;
/// Transfer request payloads
pub mod transfer;

pub use account::Account;
pub use pocket::Pocket;

/// Decimal places a balance can hold (`NUMERIC(19, 4)` columns).
pub const BALANCE_SCALE: u32 = 4;

/// Largest balance a `NUMERIC(19, 4)` column can hold: 999999999999999.9999.
pub const MAX_BALANCE: Decimal = Decimal::from_parts(0x89E7_FFFF, 0x8AC7_2304, 0, false, 4);

/// Whether `amount` is representable as a stored balance without rounding.
pub fn fits_balance_scale(amount: Decimal) -> bool {
    amount.normalize().scale() <= BALANCE_SCALE
}

/// `balance + amount`, bounded by [`MAX_BALANCE`].
pub(crate) fn add_to_balance(balance: Decimal, amount: Decimal) -> Result<Decimal, AppError> {
    balance
        .checked_add(amount)
        .filter(|sum| *sum <= MAX_BALANCE)
        .ok_or(AppError::BalanceOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_max_balance_matches_column() {
        assert_eq!(MAX_BALANCE, dec!(999999999999999.9999));
    }

    #[rstest]
    #[case::integer(dec!(200), true)]
    #[case::four_places(dec!(0.0001), true)]
    #[case::trailing_zeros(dec!(1.50000000), true)]
    #[case::five_places(dec!(0.00005), false)]
    fn test_fits_balance_scale(#[case] amount: Decimal, #[case] expected: bool) {
        assert_eq!(fits_balance_scale(amount), expected);
    }

    #[rstest]
    #[case::below(dec!(999999999999999.9998), dec!(0.0001), true)]
    #[case::above(dec!(900000000000000), dec!(200000000000000), false)]
    fn test_add_to_balance_bound(
        #[case] balance: Decimal,
        #[case] amount: Decimal,
        #[case] ok: bool,
    ) {
        assert_eq!(add_to_balance(balance, amount).is_ok(), ok);
    }
}
