use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::DebtwiseError;
use crate::projection::payoff::{BALANCE_EPSILON, MAX_MONTHS};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::DebtwiseResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub principal: Money,
    pub monthly_payment: Money,
    /// Annual rate as a fraction (0.085 = 8.5% APR).
    pub annual_rate: Rate,
    /// Date of the first period's start; row N is dated `as_of` + N months.
    pub as_of: NaiveDate,
}

/// A single month in the payoff table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMonth {
    pub month: u32,
    pub date: NaiveDate,
    pub opening_balance: Money,
    pub interest: Money,
    pub principal_portion: Money,
    /// Cash actually paid this month. Equals the fixed commitment except in
    /// the final month, which pays only interest plus the residual balance.
    pub payment: Money,
    pub closing_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub months: Vec<ScheduleMonth>,
    pub total_interest: Money,
    pub total_principal: Money,
    /// True when the table was cut off at the simulation horizon.
    pub truncated: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the month-by-month payoff table for a fixed-payment debt.
///
/// Unlike `project_payoff`, a payment that cannot cover interest is an
/// error here: there is no finite table to build for a balance that grows.
pub fn build_schedule(
    input: &ScheduleInput,
) -> DebtwiseResult<ComputationOutput<AmortizationSchedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let monthly_rate = input.annual_rate / dec!(12);
    if input.monthly_payment <= input.principal * monthly_rate {
        return Err(DebtwiseError::NonAmortizing(format!(
            "Payment {} does not exceed the first month's interest accrual of {}",
            input.monthly_payment,
            input.principal * monthly_rate
        )));
    }

    let mut months = Vec::new();
    let mut balance = input.principal;
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;
    let mut month: u32 = 0;

    while balance > BALANCE_EPSILON && month < MAX_MONTHS {
        month += 1;
        let opening = balance;
        let interest = opening * monthly_rate;
        let principal_portion = (input.monthly_payment - interest).min(opening);
        balance = opening - principal_portion;

        total_interest += interest;
        total_principal += principal_portion;

        let date = input
            .as_of
            .checked_add_months(Months::new(month))
            .ok_or_else(|| {
                DebtwiseError::DateError(format!(
                    "Cannot advance {} by {} months",
                    input.as_of, month
                ))
            })?;

        months.push(ScheduleMonth {
            month,
            date,
            opening_balance: opening,
            interest,
            principal_portion,
            payment: interest + principal_portion,
            closing_balance: balance,
        });
    }

    let truncated = balance > BALANCE_EPSILON;
    if truncated {
        warnings.push(format!(
            "Schedule cut off at the {MAX_MONTHS}-month horizon with {balance} outstanding."
        ));
    }

    let output = AmortizationSchedule {
        months,
        total_interest,
        total_principal,
        truncated,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "monthly_payment": input.monthly_payment.to_string(),
        "annual_rate": input.annual_rate.to_string(),
        "as_of": input.as_of,
    });

    Ok(with_metadata(
        "Amortization schedule (fixed payment)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &ScheduleInput) -> DebtwiseResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(DebtwiseError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive to build a schedule.".into(),
        });
    }
    if input.monthly_payment <= Decimal::ZERO {
        return Err(DebtwiseError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "Monthly payment must be positive.".into(),
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
