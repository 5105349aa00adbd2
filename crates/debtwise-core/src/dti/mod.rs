//! Debt-to-income: the ratio itself, its tier classifier, and the
//! portfolio-level summary built from both.

pub mod ratio;
pub mod recommendation;

#[cfg(feature = "portfolio")]
pub mod summary;
