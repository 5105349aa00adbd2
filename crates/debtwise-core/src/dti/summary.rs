use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::account::DebtAccount;
use crate::dti::ratio::debt_to_income;
use crate::dti::recommendation::{recommend_for_dti, Recommendation};
use crate::error::DebtwiseError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::DebtwiseResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioInput {
    pub debts: Vec<DebtAccount>,
    /// The user's monthly income; zero or absent income yields a zero DTI.
    #[serde(default)]
    pub monthly_income: Money,
}

/// Portfolio-level debt overview attached to the host's debt listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtSummary {
    /// Sum of original principals across all supplied debts.
    pub total_debt: Money,
    pub total_monthly_payment: Money,
    pub monthly_income: Money,
    pub dti: Percent,
    pub recommendation: Recommendation,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Aggregate a user's debts into totals, a DTI percentage and its tier
/// recommendation. All supplied debts count toward the totals regardless
/// of status.
pub fn summarize_portfolio(
    input: &PortfolioInput,
) -> DebtwiseResult<ComputationOutput<DebtSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.monthly_income < Decimal::ZERO {
        return Err(DebtwiseError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Monthly income cannot be negative.".into(),
        });
    }

    let total_debt: Money = input.debts.iter().map(|d| d.principal).sum();
    let total_monthly_payment: Money = input.debts.iter().map(|d| d.monthly_payment).sum();

    if input.monthly_income.is_zero() && !input.debts.is_empty() {
        warnings.push("Monthly income is zero or missing; DTI reported as 0.".into());
    }

    let dti = debt_to_income(total_monthly_payment, input.monthly_income);
    let recommendation = recommend_for_dti(dti);

    let summary = DebtSummary {
        total_debt,
        total_monthly_payment,
        monthly_income: input.monthly_income,
        dti,
        recommendation,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "debt_count": input.debts.len(),
    });

    Ok(with_metadata(
        "Debt-to-income summary",
        &assumptions,
        warnings,
        elapsed,
        summary,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
