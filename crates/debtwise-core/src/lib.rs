pub mod account;
pub mod error;
pub mod types;

#[cfg(feature = "projection")]
pub mod projection;

#[cfg(feature = "dti")]
pub mod dti;

#[cfg(feature = "strategy")]
pub mod strategy;

pub use error::DebtwiseError;
pub use types::*;

/// Standard result type for all debtwise operations
pub type DebtwiseResult<T> = Result<T, DebtwiseError>;
