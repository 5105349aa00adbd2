use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

/// Debt-to-income ratio as a percentage.
///
/// Returns 0 when income is zero (or negative), never dividing by zero.
pub fn debt_to_income(total_monthly_debt_payments: Money, monthly_income: Money) -> Percent {
    if monthly_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    total_monthly_debt_payments / monthly_income * dec!(100)
}
