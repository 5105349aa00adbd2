use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use debtwise_core::projection::payoff::{self, PayoffInput};
use debtwise_core::projection::schedule::{self, ScheduleInput};

use crate::input;

/// Arguments for the payoff projection
#[derive(Args)]
pub struct PayoffArgs {
    /// Path to a JSON/YAML input file holding a PayoffInput (overrides flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Outstanding balance
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Fixed monthly payment
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,

    /// Annual percentage rate as a percent (8.5 = 8.5%)
    #[arg(long)]
    pub apr: Option<Decimal>,

    /// Anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Arguments for the amortization table
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to a JSON/YAML input file holding a ScheduleInput (overrides flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Outstanding balance
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Fixed monthly payment
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,

    /// Annual percentage rate as a percent (8.5 = 8.5%)
    #[arg(long)]
    pub apr: Option<Decimal>,

    /// Anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payoff_input: PayoffInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PayoffInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            monthly_payment: args
                .monthly_payment
                .ok_or("--monthly-payment is required (or provide --input)")?,
            // Flags take the user-facing percent; the core wants a fraction
            annual_rate: args.apr.ok_or("--apr is required (or provide --input)")? / dec!(100),
            as_of: args.as_of.unwrap_or_else(|| Local::now().date_naive()),
        }
    };

    let output = payoff::project_payoff(&payoff_input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ScheduleInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            monthly_payment: args
                .monthly_payment
                .ok_or("--monthly-payment is required (or provide --input)")?,
            annual_rate: args.apr.ok_or("--apr is required (or provide --input)")? / dec!(100),
            as_of: args.as_of.unwrap_or_else(|| Local::now().date_naive()),
        }
    };

    let output = schedule::build_schedule(&schedule_input)?;
    Ok(serde_json::to_value(output)?)
}
