//! Whole-rupee rounding for derived pay amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a derived amount to the nearest whole rupee, midpoints away from
/// zero.
///
/// Every derived line item (Basic, HRA, both PF contributions, both ESI
/// contributions) passes through this immediately after it is computed.
/// Pure sums and remainders (gross, net, the special allowance, the monthly
/// CTC) are never re-rounded, so nothing is lost to double rounding.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_rupees;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("7000.50").unwrap();
/// assert_eq!(round_rupees(amount), Decimal::from_str("7001").unwrap());
///
/// let amount = Decimal::from_str("773.49").unwrap();
/// assert_eq!(round_rupees(amount), Decimal::from_str("773").unwrap());
/// ```
pub fn round_rupees(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
