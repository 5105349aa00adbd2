use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebtwiseError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("No active debts: {0}")]
    NoActiveDebts(String),

    #[error("Non-amortizing debt: {0}")]
    NonAmortizing(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DebtwiseError {
    fn from(e: serde_json::Error) -> Self {
        DebtwiseError::SerializationError(e.to_string())
    }
}
