//! Error type for the fallible edges of the crate (file and format I/O)
//!
//! Rejected inputs are not errors: validation failure is reported through
//! `ProjectionResult::display_results`, never through this type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid scenario on line {line}: {reason}")]
    InvalidScenario { line: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
