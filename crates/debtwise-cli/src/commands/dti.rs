use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use debtwise_core::dti::ratio::debt_to_income;
use debtwise_core::dti::recommendation::recommend_for_dti;
use debtwise_core::dti::summary::{self, PortfolioInput};

use crate::input;

/// Arguments for the DTI classifier
#[derive(Args)]
pub struct DtiArgs {
    /// Sum of all monthly debt payments
    #[arg(long)]
    pub monthly_debt_payments: Decimal,

    /// Monthly income (zero yields a zero ratio)
    #[arg(long)]
    pub monthly_income: Decimal,
}

/// Arguments for the portfolio summary
#[derive(Args)]
pub struct SummaryArgs {
    /// Path to a JSON/YAML input file holding a PortfolioInput
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_dti(args: DtiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let dti = debt_to_income(args.monthly_debt_payments, args.monthly_income);
    let recommendation = recommend_for_dti(dti);
    Ok(serde_json::json!({
        "dti": dti,
        "recommendation": recommendation,
    }))
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let portfolio_input: PortfolioInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("summary requires --input or piped JSON on stdin".into());
    };

    let output = summary::summarize_portfolio(&portfolio_input)?;
    Ok(serde_json::to_value(output)?)
}
