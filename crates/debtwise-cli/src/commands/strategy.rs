use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Deserialize;
use serde_json::Value;

use debtwise_core::account::DebtAccount;
use debtwise_core::strategy::ranking::{self, StrategyInput};

use crate::input;

/// Arguments for strategy ranking
#[derive(Args)]
pub struct StrategyArgs {
    /// Path to a JSON/YAML input file holding the debt portfolio
    #[arg(long)]
    pub input: Option<String>,

    /// Anchor date (YYYY-MM-DD); defaults to today when the file omits it
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// File shape for `dw strategy`: the debts, with the anchor date optional
/// so host exports can be piped through untouched.
#[derive(Deserialize)]
struct StrategyFile {
    debts: Vec<DebtAccount>,
    as_of: Option<NaiveDate>,
}

pub fn run_strategy(args: StrategyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let file: StrategyFile = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("strategy requires --input or piped JSON on stdin".into());
    };

    let strategy_input = StrategyInput {
        debts: file.debts,
        as_of: file
            .as_of
            .or(args.as_of)
            .unwrap_or_else(|| Local::now().date_naive()),
    };

    let output = ranking::rank_strategies(&strategy_input)?;
    Ok(serde_json::to_value(output)?)
}
