use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::account::{DebtAccount, DebtStatus};
use crate::error::DebtwiseError;
use crate::projection::payoff::{project_payoff, PayoffInput, PayoffProjection};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::DebtwiseResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInput {
    pub debts: Vec<DebtAccount>,
    /// Anchor date handed to the per-debt simulations.
    pub as_of: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyMethod {
    Snowball,
    Avalanche,
}

/// One debt in a payoff sequence, with both sort keys for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderedDebt {
    pub id: String,
    pub name: String,
    pub balance: Money,
    pub apr: Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyPlan {
    pub method: StrategyMethod,
    pub ordering: Vec<OrderedDebt>,
    /// Aggregate interest across the ordering's debts, each simulated
    /// independently. `None` when some debt never amortizes.
    pub projected_interest: Option<Money>,
    pub recommended: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub snowball: StrategyPlan,
    pub avalanche: StrategyPlan,
    /// Absolute difference of the two aggregate totals; zero when either
    /// side is unbounded.
    pub interest_saved: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Rank a debt portfolio under the snowball (smallest balance first) and
/// avalanche (highest rate first) orderings and recommend the cheaper one.
///
/// Non-active debts are filtered out here rather than relying on the
/// caller's query. Each debt is simulated on its own payment; a paid-off
/// debt's payment does NOT roll over into the next debt, so the two
/// aggregate totals coincide whenever every debt amortizes.
pub fn rank_strategies(
    input: &StrategyInput,
) -> DebtwiseResult<ComputationOutput<StrategyComparison>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let active: Vec<&DebtAccount> = input
        .debts
        .iter()
        .filter(|d| d.status == DebtStatus::Active)
        .collect();

    if active.is_empty() {
        return Err(DebtwiseError::NoActiveDebts(
            "The portfolio has no active debts to rank.".into(),
        ));
    }

    // Simulate each active debt once; both orderings fold over these.
    let mut per_debt_interest: Vec<Option<Money>> = Vec::with_capacity(active.len());
    for debt in &active {
        let projection = project_payoff(&PayoffInput {
            principal: debt.balance(),
            monthly_payment: debt.monthly_payment,
            annual_rate: debt.annual_rate(),
            as_of: input.as_of,
        })?;
        match &projection.result {
            PayoffProjection::NeverPaidOff { .. } => {
                warnings.push(format!(
                    "Debt '{}' never pays off at its current payment; aggregate interest is unbounded.",
                    debt.name
                ));
            }
            PayoffProjection::HorizonExceeded { .. } => {
                warnings.push(format!(
                    "Debt '{}' does not amortize within the simulation horizon; partial interest included.",
                    debt.name
                ));
            }
            PayoffProjection::PaidOff { .. } => {}
        }
        per_debt_interest.push(projection.result.total_interest());
    }

    let mut snowball_order: Vec<usize> = (0..active.len()).collect();
    snowball_order.sort_by(|&a, &b| active[a].balance().cmp(&active[b].balance()));

    let mut avalanche_order: Vec<usize> = (0..active.len()).collect();
    avalanche_order.sort_by(|&a, &b| active[b].apr.cmp(&active[a].apr));

    let snowball_interest = aggregate_interest(&snowball_order, &per_debt_interest);
    let avalanche_interest = aggregate_interest(&avalanche_order, &per_debt_interest);

    // Ties favor avalanche.
    let avalanche_recommended = match (avalanche_interest, snowball_interest) {
        (Some(a), Some(s)) => a <= s,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => true,
    };

    let interest_saved = match (snowball_interest, avalanche_interest) {
        (Some(s), Some(a)) => (s - a).abs(),
        _ => Decimal::ZERO,
    };

    let comparison = StrategyComparison {
        snowball: StrategyPlan {
            method: StrategyMethod::Snowball,
            ordering: ordered_debts(&snowball_order, &active),
            projected_interest: snowball_interest,
            recommended: !avalanche_recommended,
        },
        avalanche: StrategyPlan {
            method: StrategyMethod::Avalanche,
            ordering: ordered_debts(&avalanche_order, &active),
            projected_interest: avalanche_interest,
            recommended: avalanche_recommended,
        },
        interest_saved,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "rollover_modeled": false,
        "active_debts": active.len(),
        "as_of": input.as_of,
    });

    Ok(with_metadata(
        "Snowball vs. avalanche ranking (independent per-debt simulations)",
        &assumptions,
        warnings,
        elapsed,
        comparison,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn aggregate_interest(order: &[usize], per_debt: &[Option<Money>]) -> Option<Money> {
    let mut total = Decimal::ZERO;
    for &idx in order {
        total += per_debt[idx]?;
    }
    Some(total)
}

fn ordered_debts(order: &[usize], active: &[&DebtAccount]) -> Vec<OrderedDebt> {
    order
        .iter()
        .map(|&idx| OrderedDebt {
            id: active[idx].id.clone(),
            name: active[idx].name.clone(),
            balance: active[idx].balance(),
            apr: active[idx].apr,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
