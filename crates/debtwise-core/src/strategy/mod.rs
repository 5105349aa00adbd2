//! Payoff strategy ranking over an active-debt portfolio.

pub mod ranking;
