//! Payoff projection: the month-by-month amortization simulator and the
//! schedule table built on the same loop.

pub mod payoff;
pub mod schedule;
