use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[napi]
pub fn project_payoff(input_json: String) -> NapiResult<String> {
    let input: debtwise_core::projection::payoff::PayoffInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        debtwise_core::projection::payoff::project_payoff(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let input: debtwise_core::projection::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        debtwise_core::projection::schedule::build_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Debt-to-income
// ---------------------------------------------------------------------------

#[napi]
pub fn dti_summary(input_json: String) -> NapiResult<String> {
    let input: debtwise_core::dti::summary::PortfolioInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        debtwise_core::dti::summary::summarize_portfolio(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

#[napi]
pub fn rank_strategies(input_json: String) -> NapiResult<String> {
    let input: debtwise_core::strategy::ranking::StrategyInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        debtwise_core::strategy::ranking::rank_strategies(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[napi]
pub fn apply_payment(
    debt_json: String,
    amount: String,
    date: String,
    note: Option<String>,
) -> NapiResult<String> {
    let mut debt: debtwise_core::account::DebtAccount =
        serde_json::from_str(&debt_json).map_err(to_napi_error)?;
    let amount: rust_decimal::Decimal = amount.parse().map_err(to_napi_error)?;
    let date: NaiveDate = date.parse().map_err(to_napi_error)?;

    debt.apply_payment(amount, date, note).map_err(to_napi_error)?;
    serde_json::to_string(&debt).map_err(to_napi_error)
}
