mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::dti::{DtiArgs, SummaryArgs};
use commands::payoff::{PayoffArgs, ScheduleArgs};
use commands::strategy::StrategyArgs;

/// Debt payoff projection and debt-health analytics
#[derive(Parser)]
#[command(
    name = "dw",
    version,
    about = "Debt payoff projection and debt-health analytics",
    long_about = "A CLI for debt analytics with decimal precision. Projects \
                  fixed-payment payoff timelines, builds amortization tables, \
                  evaluates debt-to-income health, and ranks snowball vs. \
                  avalanche payoff strategies."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project payoff time, total interest and payoff date for one debt
    Payoff(PayoffArgs),
    /// Build the month-by-month amortization table for one debt
    Schedule(ScheduleArgs),
    /// Classify a debt-to-income ratio into a risk tier
    Dti(DtiArgs),
    /// Summarize a debt portfolio against monthly income
    Summary(SummaryArgs),
    /// Rank snowball vs. avalanche payoff orderings for a portfolio
    Strategy(StrategyArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payoff(args) => commands::payoff::run_payoff(args),
        Commands::Schedule(args) => commands::payoff::run_schedule(args),
        Commands::Dti(args) => commands::dti::run_dti(args),
        Commands::Summary(args) => commands::dti::run_summary(args),
        Commands::Strategy(args) => commands::strategy::run_strategy(args),
        Commands::Version => {
            println!("dw {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
