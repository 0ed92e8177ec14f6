//! Investment Calculator - projection engine comparing tax-deferred and tax-free accounts
//!
//! This library provides:
//! - Validation of the six calculator inputs (fail-closed, never an error)
//! - Compound growth, real rate of return and tax formulas
//! - Nominal and inflation-adjusted future values
//! - Tax-deferred (RRSP-style) and tax-free (TFSA-style) after-tax projections
//! - Batch scenario runs from CSV

pub mod error;
pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use inputs::{validate, InvestmentInputs, Scenario, ValidationPolicy};
pub use projection::{
    calculate, AccountKind, AccountProjection, ProjectionConfig, ProjectionEngine,
    ProjectionResult, ProjectionRow,
};
pub use scenario::ScenarioRunner;
