use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::DebtwiseError;
use crate::types::{Currency, Money, Percent, Rate};
use crate::DebtwiseResult;

/// Lifecycle status of a tracked debt. Only `Active` debts participate in
/// strategy ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    Active,
    PaidOff,
    Defaulted,
}

/// A single recorded payment. History entries are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub amount: Money,
    pub date: NaiveDate,
    pub principal_portion: Money,
    pub interest_portion: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A debt record as stored by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtAccount {
    pub id: String,
    pub name: String,
    /// Original amount borrowed.
    pub principal: Money,
    /// Outstanding balance. Absent until the first payment is recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<Money>,
    /// Fixed recurring payment commitment.
    pub monthly_payment: Money,
    /// Annual percentage rate as a percentage number (8.5 = 8.5%).
    pub apr: Percent,
    pub status: DebtStatus,
    #[serde(default)]
    pub payment_history: Vec<PaymentRecord>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DebtAccount {
    /// Outstanding balance, falling back to the original principal when no
    /// payment has been recorded yet.
    pub fn balance(&self) -> Money {
        self.current_balance.unwrap_or(self.principal)
    }

    /// APR as a fraction (8.5 -> 0.085).
    pub fn annual_rate(&self) -> Rate {
        self.apr / dec!(100)
    }

    /// Periodic monthly rate (8.5 -> 0.085 / 12).
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate() / dec!(12)
    }

    /// Record a payment against this debt.
    ///
    /// One month's interest accrual is taken first (capped at the payment
    /// amount); the remainder reduces principal, floored at a zero balance.
    /// Reaching zero transitions the debt to `PaidOff`. The record is
    /// appended to `payment_history` and returned.
    pub fn apply_payment(
        &mut self,
        amount: Money,
        date: NaiveDate,
        note: Option<String>,
    ) -> DebtwiseResult<PaymentRecord> {
        if amount <= Decimal::ZERO {
            return Err(DebtwiseError::InvalidInput {
                field: "amount".into(),
                reason: "Payment amount must be positive.".into(),
            });
        }
        if self.status != DebtStatus::Active {
            return Err(DebtwiseError::InvalidInput {
                field: "status".into(),
                reason: "Payments can only be recorded against active debts.".into(),
            });
        }

        let balance = self.balance();
        let interest_portion = (balance * self.monthly_rate()).min(amount);
        let principal_portion = (amount - interest_portion).min(balance);

        let record = PaymentRecord {
            amount,
            date,
            principal_portion,
            interest_portion,
            note,
        };

        let new_balance = balance - principal_portion;
        self.current_balance = Some(new_balance);
        if new_balance.is_zero() {
            self.status = DebtStatus::PaidOff;
        }
        self.payment_history.push(record.clone());

        Ok(record)
    }
}
