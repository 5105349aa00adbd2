use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::DebtwiseError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::DebtwiseResult;

/// Termination tolerance for the payoff loop, in monetary units.
pub const BALANCE_EPSILON: Decimal = dec!(0.01);

/// Hard cap on simulated months (50 years). Guarantees termination even
/// when rounding keeps the balance from ever reaching zero exactly.
pub const MAX_MONTHS: u32 = 600;

pub const INSUFFICIENT_PAYMENT_WARNING: &str =
    "Monthly payment is too low to cover interest. Debt will not be paid off.";

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffInput {
    pub principal: Money,
    pub monthly_payment: Money,
    /// Annual rate as a fraction (0.085 = 8.5% APR).
    pub annual_rate: Rate,
    /// Anchor date; the payoff date is this plus the simulated months.
    pub as_of: NaiveDate,
}

/// Result of a payoff simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PayoffProjection {
    /// Balance amortizes to zero within the simulation horizon.
    PaidOff {
        months_to_payoff: u32,
        total_interest: Money,
        total_paid: Money,
        projected_payoff_date: NaiveDate,
    },
    /// The horizon cap was hit with balance left over. Partial totals only.
    HorizonExceeded {
        months_simulated: u32,
        total_interest: Money,
        total_paid: Money,
        remaining_principal: Money,
    },
    /// Payment does not exceed the first month's interest accrual.
    NeverPaidOff {
        monthly_interest: Money,
        warning: String,
    },
}

impl PayoffProjection {
    pub fn is_paid_off(&self) -> bool {
        matches!(self, PayoffProjection::PaidOff { .. })
    }

    /// Interest cost of this projection, when it is bounded.
    pub fn total_interest(&self) -> Option<Money> {
        match self {
            PayoffProjection::PaidOff { total_interest, .. }
            | PayoffProjection::HorizonExceeded { total_interest, .. } => Some(*total_interest),
            PayoffProjection::NeverPaidOff { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simulate month-by-month paydown of a fixed-payment debt.
///
/// Each month accrues `balance * rate / 12` of interest; the remainder of
/// the payment reduces principal, capped at the outstanding balance. The
/// loop stops once the balance drops to `BALANCE_EPSILON` or `MAX_MONTHS`
/// is reached. A payment that does not exceed the first month's accrual
/// short-circuits to `NeverPaidOff` without simulating.
pub fn project_payoff(
    input: &PayoffInput,
) -> DebtwiseResult<ComputationOutput<PayoffProjection>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let monthly_rate = input.annual_rate / dec!(12);
    let mut remaining = input.principal;

    let projection = if input.monthly_payment <= remaining * monthly_rate {
        PayoffProjection::NeverPaidOff {
            monthly_interest: remaining * monthly_rate,
            warning: INSUFFICIENT_PAYMENT_WARNING.to_string(),
        }
    } else {
        let mut total_paid = Decimal::ZERO;
        let mut months: u32 = 0;

        while remaining > BALANCE_EPSILON && months < MAX_MONTHS {
            let interest = remaining * monthly_rate;
            let principal_portion = (input.monthly_payment - interest).min(remaining);
            remaining -= principal_portion;
            total_paid += input.monthly_payment;
            months += 1;
        }

        let total_interest = total_paid - input.principal;

        if remaining > BALANCE_EPSILON {
            warnings.push(format!(
                "Simulation stopped at the {MAX_MONTHS}-month horizon with {remaining} outstanding."
            ));
            PayoffProjection::HorizonExceeded {
                months_simulated: months,
                total_interest,
                total_paid,
                remaining_principal: remaining,
            }
        } else {
            let projected_payoff_date = input
                .as_of
                .checked_add_months(Months::new(months))
                .ok_or_else(|| {
                    DebtwiseError::DateError(format!(
                        "Cannot advance {} by {} months",
                        input.as_of, months
                    ))
                })?;
            PayoffProjection::PaidOff {
                months_to_payoff: months,
                total_interest,
                total_paid,
                projected_payoff_date,
            }
        }
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "balance_epsilon": BALANCE_EPSILON.to_string(),
        "max_months": MAX_MONTHS,
        "as_of": input.as_of,
    });

    Ok(with_metadata(
        "Fixed-payment amortization simulation",
        &assumptions,
        warnings,
        elapsed,
        projection,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &PayoffInput) -> DebtwiseResult<()> {
    if input.principal < Decimal::ZERO {
        return Err(DebtwiseError::InvalidInput {
            field: "principal".into(),
            reason: "Principal cannot be negative.".into(),
        });
    }
    if input.monthly_payment < Decimal::ZERO {
        return Err(DebtwiseError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "Monthly payment cannot be negative.".into(),
        });
    }
    if input.annual_rate < Decimal::ZERO {
        return Err(DebtwiseError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Annual rate cannot be negative.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(principal: Decimal, payment: Decimal, rate: Decimal) -> PayoffInput {
        PayoffInput {
            principal,
            monthly_payment: payment,
            annual_rate: rate,
            as_of: day(2025, 1, 15),
        }
    }

    #[test]
    fn test_small_loan_pays_off() {
        let result = project_payoff(&input(dec!(1000), dec!(500), dec!(0.12))).unwrap();
        match result.result {
            PayoffProjection::PaidOff {
                months_to_payoff,
                total_interest,
                total_paid,
                projected_payoff_date,
            } => {
                // Month 1: interest 10, principal 490 -> 510
                // Month 2: interest 5.10, principal 494.90 -> 15.10
                // Month 3: interest 0.151, remaining 15.10 repaid in full
                assert_eq!(months_to_payoff, 3);
                assert_eq!(total_paid, dec!(1500));
                assert_eq!(total_interest, dec!(500));
                assert_eq!(projected_payoff_date, day(2025, 4, 15));
            }
            other => panic!("Expected PaidOff, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let result = project_payoff(&input(dec!(1000), dec!(100), Decimal::ZERO)).unwrap();
        match result.result {
            PayoffProjection::PaidOff {
                months_to_payoff,
                total_interest,
                total_paid,
                ..
            } => {
                assert_eq!(months_to_payoff, 10);
                assert_eq!(total_interest, Decimal::ZERO);
                assert_eq!(total_paid, dec!(1000));
            }
            other => panic!("Expected PaidOff, got {other:?}"),
        }
    }

    #[test]
    fn test_payment_equal_to_interest_never_pays_off() {
        // 1% monthly on 10 000 accrues exactly the 100 payment
        let result = project_payoff(&input(dec!(10_000), dec!(100), dec!(0.12))).unwrap();
        match result.result {
            PayoffProjection::NeverPaidOff {
                monthly_interest,
                warning,
            } => {
                assert_eq!(monthly_interest, dec!(100));
                assert_eq!(warning, INSUFFICIENT_PAYMENT_WARNING);
            }
            other => panic!("Expected NeverPaidOff, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_payment_never_pays_off() {
        let result = project_payoff(&input(dec!(500), Decimal::ZERO, dec!(0.08))).unwrap();
        assert!(matches!(
            result.result,
            PayoffProjection::NeverPaidOff { .. }
        ));
    }

    #[test]
    fn test_zero_principal_zero_payment_takes_guard_path() {
        // 0 <= 0 * rate, so the guard fires before the loop would
        let result = project_payoff(&input(Decimal::ZERO, Decimal::ZERO, dec!(0.10))).unwrap();
        assert!(matches!(
            result.result,
            PayoffProjection::NeverPaidOff { .. }
        ));
    }

    #[test]
    fn test_zero_principal_positive_payment_is_instant() {
        let result = project_payoff(&input(Decimal::ZERO, dec!(100), dec!(0.10))).unwrap();
        match result.result {
            PayoffProjection::PaidOff {
                months_to_payoff,
                total_paid,
                projected_payoff_date,
                ..
            } => {
                assert_eq!(months_to_payoff, 0);
                assert_eq!(total_paid, Decimal::ZERO);
                assert_eq!(projected_payoff_date, day(2025, 1, 15));
            }
            other => panic!("Expected PaidOff, got {other:?}"),
        }
    }

    #[test]
    fn test_horizon_cap_yields_partial_result() {
        // Payment barely above the 1 000 first-month accrual; full payoff
        // would take ~694 months, past the 600-month horizon
        let result = project_payoff(&input(dec!(100_000), dec!(1001), dec!(0.12))).unwrap();
        match result.result {
            PayoffProjection::HorizonExceeded {
                months_simulated,
                remaining_principal,
                total_paid,
                ..
            } => {
                assert_eq!(months_simulated, MAX_MONTHS);
                assert!(remaining_principal > BALANCE_EPSILON);
                assert_eq!(total_paid, dec!(1001) * Decimal::from(MAX_MONTHS));
            }
            other => panic!("Expected HorizonExceeded, got {other:?}"),
        }
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_negative_principal_rejected() {
        let err = project_payoff(&input(dec!(-1), dec!(100), dec!(0.10))).unwrap_err();
        match err {
            DebtwiseError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata_populated() {
        let result = project_payoff(&input(dec!(1000), dec!(500), dec!(0.12))).unwrap();
        assert!(!result.methodology.is_empty());
        assert_eq!(result.metadata.precision, "rust_decimal_128bit");
    }
}
